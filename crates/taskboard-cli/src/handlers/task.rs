use crate::cli::TaskAction;
use crate::context::CliContext;
use crate::output;
use taskboard_domain::{tasks_for_status, Task, TaskUpdate};

pub async fn handle(file_path: &str, action: TaskAction) -> anyhow::Result<()> {
    let mut ctx = CliContext::load(file_path).await?;

    match action {
        TaskAction::Add {
            title,
            description,
            status_id,
        } => {
            if ctx.board.status(status_id).is_none() {
                output::output_error(&format!("Column not found: {status_id}"));
            }
            let task = match Task::new(title, description, status_id) {
                Ok(task) => task,
                Err(e) => output::output_error(&e.to_string()),
            };
            let task_id = task.id;
            ctx.apply(ctx.board.add_task(task));
            ctx.save().await?;
            output::output_success(ctx.board.task(task_id));
        }
        TaskAction::List { status_id } => match status_id {
            Some(status_id) => {
                output::output_list(tasks_for_status(&ctx.board.tasks, status_id));
            }
            None => output::output_list(ctx.board.tasks.clone()),
        },
        TaskAction::Move {
            id,
            status_id,
            order,
        } => {
            if ctx.board.task(id).is_none() {
                output::output_error(&format!("Task not found: {id}"));
            }
            if ctx.board.status(status_id).is_none() {
                output::output_error(&format!("Column not found: {status_id}"));
            }
            ctx.apply(ctx.board.move_task(id, status_id, order));
            ctx.save().await?;
            output::output_success(ctx.board.task(id));
        }
        TaskAction::Update {
            id,
            title,
            description,
        } => {
            if ctx.board.task(id).is_none() {
                output::output_error(&format!("Task not found: {id}"));
            }
            let updates = TaskUpdate {
                title,
                description,
                tags: None,
            };
            match ctx.board.update_task(id, updates) {
                Ok(next) => ctx.apply(next),
                Err(e) => output::output_error(&e.to_string()),
            }
            ctx.save().await?;
            output::output_success(ctx.board.task(id));
        }
        TaskAction::Delete { id } => {
            if ctx.board.task(id).is_none() {
                output::output_error(&format!("Task not found: {id}"));
            }
            ctx.apply(ctx.board.delete_task(id));
            ctx.save().await?;
            output::output_success(serde_json::json!({ "deleted": id }));
        }
    }
    Ok(())
}
