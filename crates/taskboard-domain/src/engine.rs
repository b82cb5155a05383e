use crate::automation::AutomationAction;
use crate::board::Board;
use crate::status::StatusId;
use crate::task::{Task, TaskId};

/// Runs every automation rule matching a task's column transition and
/// returns the full updated task list.
///
/// Board-level rules are evaluated before per-column rules (columns in board
/// iteration order); within a rule, actions run in list order. There is no
/// priority or short-circuit: all matching rules and all their actions run.
pub fn trigger_automations(
    board: &Board,
    task: &Task,
    from_status_id: StatusId,
    to_status_id: StatusId,
) -> Vec<Task> {
    let mut tasks = board.tasks.clone();

    let candidates = board.global_automations.iter().chain(
        board
            .statuses
            .iter()
            .flat_map(|status| status.automations.iter()),
    );

    for rule in candidates.filter(|rule| rule.matches(from_status_id, to_status_id)) {
        for action in &rule.actions {
            tasks = execute_automation_action(tasks, task.id, action);
        }
    }

    tasks
}

/// Applies one automation action to the task it targets. The task is
/// re-resolved by id on every call so consecutive actions compose against
/// the freshest snapshot. An unknown task id leaves the list untouched.
pub fn execute_automation_action(
    mut tasks: Vec<Task>,
    task_id: TaskId,
    action: &AutomationAction,
) -> Vec<Task> {
    let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
        return tasks;
    };

    match action {
        AutomationAction::AddTag { tag } => task.add_tag(tag),
        AutomationAction::RemoveTag { tag } => task.remove_tag(tag),
        AutomationAction::UpdateField { field, value } => task.set_field(field, value.clone()),
        AutomationAction::Notification { message } => {
            tracing::info!(
                "automation notification: {}",
                message.as_deref().unwrap_or("Task moved")
            );
        }
        other => {
            tracing::warn!("unhandled automation action: {:?}", other);
        }
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::{AutomationRule, RuleConfig, TriggerKind};
    use serde_json::json;
    use uuid::Uuid;

    fn board_with_task() -> (Board, TaskId) {
        let board = Board::new("Test".to_string(), String::new());
        let todo = board.statuses[0].id;
        let task = Task::new("Ship it".to_string(), String::new(), todo).unwrap();
        let task_id = task.id;
        (board.add_task(task), task_id)
    }

    fn add_tag_rule(name: &str, to: StatusId, tag: &str) -> AutomationRule {
        AutomationRule::new(
            name.to_string(),
            TriggerKind::MoveTo,
            RuleConfig {
                to_status_id: Some(to),
                actions: vec![AutomationAction::AddTag {
                    tag: tag.to_string(),
                }],
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_global_rules_run_before_column_rules() {
        let (board, task_id) = board_with_task();
        let todo = board.statuses[0].id;
        let done = board.statuses[3].id;

        let board = board
            .add_automation(done, add_tag_rule("column", done, "from-column"))
            .add_global_automation(add_tag_rule("global", done, "from-global"));

        let task = board.task(task_id).unwrap().clone();
        let tasks = trigger_automations(&board, &task, todo, done);
        let task = tasks.iter().find(|t| t.id == task_id).unwrap();
        assert_eq!(task.tags, ["from-global", "from-column"]);
    }

    #[test]
    fn test_move_from_rule_fires_on_source_column() {
        let (board, task_id) = board_with_task();
        let todo = board.statuses[0].id;
        let done = board.statuses[3].id;

        let rule = AutomationRule::new(
            "left todo".to_string(),
            TriggerKind::MoveFrom,
            RuleConfig {
                from_status_id: Some(todo),
                actions: vec![AutomationAction::AddTag {
                    tag: "left-todo".to_string(),
                }],
                ..Default::default()
            },
        );
        let board = board.add_global_automation(rule);

        let task = board.task(task_id).unwrap().clone();
        let tasks = trigger_automations(&board, &task, todo, done);
        assert_eq!(
            tasks.iter().find(|t| t.id == task_id).unwrap().tags,
            ["left-todo"]
        );

        // a move that does not leave todo is ignored
        let tasks = trigger_automations(&board, &task, done, todo);
        assert!(tasks.iter().find(|t| t.id == task_id).unwrap().tags.is_empty());
    }

    #[test]
    fn test_disabled_rule_mutates_nothing() {
        let (board, task_id) = board_with_task();
        let todo = board.statuses[0].id;
        let done = board.statuses[3].id;

        let mut rule = add_tag_rule("off", done, "never");
        rule.set_enabled(false);
        let board = board.add_global_automation(rule);

        let task = board.task(task_id).unwrap().clone();
        let tasks = trigger_automations(&board, &task, todo, done);
        assert!(tasks.iter().find(|t| t.id == task_id).unwrap().tags.is_empty());
    }

    #[test]
    fn test_actions_compose_within_one_trigger() {
        let (board, task_id) = board_with_task();
        let todo = board.statuses[0].id;
        let done = board.statuses[3].id;

        let rule = AutomationRule::new(
            "swap tags".to_string(),
            TriggerKind::MoveTo,
            RuleConfig {
                to_status_id: Some(done),
                actions: vec![
                    AutomationAction::AddTag {
                        tag: "completed".to_string(),
                    },
                    AutomationAction::RemoveTag {
                        tag: "completed".to_string(),
                    },
                    AutomationAction::AddTag {
                        tag: "archived".to_string(),
                    },
                ],
                ..Default::default()
            },
        );
        let board = board.add_global_automation(rule);

        let task = board.task(task_id).unwrap().clone();
        let tasks = trigger_automations(&board, &task, todo, done);
        assert_eq!(tasks.iter().find(|t| t.id == task_id).unwrap().tags, ["archived"]);
    }

    #[test]
    fn test_update_field_writes_metadata() {
        let (board, task_id) = board_with_task();
        let tasks = execute_automation_action(
            board.tasks.clone(),
            task_id,
            &AutomationAction::UpdateField {
                field: "priority".to_string(),
                value: json!("high"),
            },
        );
        let task = tasks.iter().find(|t| t.id == task_id).unwrap();
        assert_eq!(task.metadata["priority"], json!("high"));
    }

    #[test]
    fn test_notification_and_reserved_kinds_leave_tasks_untouched() {
        let (board, task_id) = board_with_task();
        let before = board.task(task_id).unwrap().updated_at;

        for action in [
            AutomationAction::Notification { message: None },
            AutomationAction::Webhook {
                url: "https://example.invalid/hook".to_string(),
            },
            AutomationAction::MoveTask {
                to_status_id: board.statuses[3].id,
            },
        ] {
            let tasks = execute_automation_action(board.tasks.clone(), task_id, &action);
            let task = tasks.iter().find(|t| t.id == task_id).unwrap();
            assert!(task.tags.is_empty());
            assert_eq!(task.updated_at, before);
        }
    }

    #[test]
    fn test_unknown_task_is_a_no_op() {
        let (board, _) = board_with_task();
        let tasks = execute_automation_action(
            board.tasks.clone(),
            Uuid::new_v4(),
            &AutomationAction::AddTag {
                tag: "ghost".to_string(),
            },
        );
        assert!(tasks.iter().all(|t| t.tags.is_empty()));
    }
}
