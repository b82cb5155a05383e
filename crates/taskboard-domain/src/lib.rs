pub mod automation;
pub mod board;
pub mod engine;
pub mod query;
pub mod status;
pub mod task;

pub use automation::{AutomationAction, AutomationRule, RuleConfig, RuleId, TriggerKind};
pub use board::{Board, BoardId};
pub use engine::{execute_automation_action, trigger_automations};
pub use query::{reorder_tasks_in_status, tasks_for_status};
pub use status::{Status, StatusId, StatusPosition, StatusUpdate};
pub use task::{Task, TaskId, TaskUpdate};
