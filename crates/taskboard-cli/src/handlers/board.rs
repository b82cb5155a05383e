use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use taskboard_core::TaskboardResult;
use taskboard_domain::{AutomationAction, AutomationRule, Board, RuleConfig, Task, TriggerKind};

pub async fn handle(file_path: &str, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Init {
            name,
            description,
            sample,
        } => {
            let board = if sample {
                match sample_board(name, description) {
                    Ok(board) => board,
                    Err(e) => output::output_error(&e.to_string()),
                }
            } else {
                Board::new(name, description)
            };
            let ctx = CliContext::create(file_path, board);
            ctx.save().await?;
            output::output_success(&ctx.board);
        }
        BoardAction::Show => {
            let ctx = CliContext::load(file_path).await?;
            output::output_success(&ctx.board);
        }
    }
    Ok(())
}

/// The demo board: two move-to rules and a starter task per active column,
/// enough to watch automations fire on the first `task move`.
fn sample_board(name: String, description: String) -> TaskboardResult<Board> {
    let mut board = Board::new(name, description);
    let todo = board.statuses[0].id;
    let in_progress = board.statuses[1].id;
    let review = board.statuses[2].id;
    let done = board.statuses[3].id;

    board = board.add_automation(
        in_progress,
        AutomationRule::new(
            "Tag tasks entering In Progress".to_string(),
            TriggerKind::MoveTo,
            RuleConfig {
                to_status_id: Some(in_progress),
                actions: vec![
                    AutomationAction::AddTag {
                        tag: "in-progress".to_string(),
                    },
                    AutomationAction::Notification {
                        message: Some("Task moved to In Progress!".to_string()),
                    },
                ],
                ..Default::default()
            },
        ),
    );
    board = board.add_automation(
        done,
        AutomationRule::new(
            "Tag tasks entering Done".to_string(),
            TriggerKind::MoveTo,
            RuleConfig {
                to_status_id: Some(done),
                actions: vec![
                    AutomationAction::AddTag {
                        tag: "completed".to_string(),
                    },
                    AutomationAction::Notification {
                        message: Some("Task completed!".to_string()),
                    },
                ],
                ..Default::default()
            },
        ),
    );

    board = board.add_task(Task::new(
        "Design the user interface".to_string(),
        "Create wireframes and mockups for the new feature".to_string(),
        todo,
    )?);
    board = board.add_task(Task::new(
        "Implement drag and drop".to_string(),
        "Wire the drag handles to column moves".to_string(),
        in_progress,
    )?);
    board = board.add_task(Task::new(
        "Write documentation".to_string(),
        "Document the API and user guide".to_string(),
        review,
    )?);

    Ok(board)
}
