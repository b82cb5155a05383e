use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taskboard_core::{TaskboardError, TaskboardResult};

use crate::automation::{AutomationRule, RuleId};
use crate::engine;
use crate::query;
use crate::status::{default_statuses, Status, StatusId, StatusPosition, StatusUpdate};
use crate::task::{Task, TaskId, TaskUpdate};

pub type BoardId = Uuid;

/// The whole board document: columns, tasks, and board-level automation
/// rules. Every mutation takes `&self` and returns a fresh snapshot; callers
/// are expected to serialize their calls, so two mutations never race on the
/// same snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub statuses: Vec<Status>,
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub global_automations: Vec<AutomationRule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// A new board starts with the default four-column layout, no tasks, and
    /// no automation rules.
    pub fn new(name: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            statuses: default_statuses(),
            tasks: Vec::new(),
            global_automations: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self, status_id: StatusId) -> Option<&Status> {
        self.statuses.iter().find(|s| s.id == status_id)
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Moves a task to a column, renumbers the affected columns, and runs
    /// the automation rules for the transition. Unknown task ids return the
    /// board unchanged.
    ///
    /// The requested order is recorded on the task before renumbering, but
    /// the renumbering flattens it to the task's sequence position within
    /// the destination column; it is not an insertion index.
    pub fn move_task(&self, task_id: TaskId, new_status_id: StatusId, new_order: i32) -> Board {
        let mut next = self.clone();

        let old_status_id;
        let moved;
        match next.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                old_status_id = task.status_id;
                task.status_id = new_status_id;
                task.order = new_order;
                task.updated_at = Utc::now();
                moved = task.clone();
            }
            None => return next,
        }

        next.tasks = query::reorder_tasks_in_status(next.tasks, new_status_id);
        if old_status_id != new_status_id {
            next.tasks = query::reorder_tasks_in_status(next.tasks, old_status_id);
        }

        let tasks = engine::trigger_automations(&next, &moved, old_status_id, new_status_id);
        next.tasks = tasks;
        next.updated_at = Utc::now();
        next
    }

    /// Appends a task and renumbers its column, which assigns the slot the
    /// factory left at zero.
    pub fn add_task(&self, task: Task) -> Board {
        let mut next = self.clone();
        let status_id = task.status_id;
        next.tasks.push(task);
        next.tasks = query::reorder_tasks_in_status(next.tasks, status_id);
        next.updated_at = Utc::now();
        next
    }

    pub fn update_task(&self, task_id: TaskId, updates: TaskUpdate) -> TaskboardResult<Board> {
        let mut next = self.clone();
        match next.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => task.apply_update(updates)?,
            None => return Ok(next),
        }
        next.updated_at = Utc::now();
        Ok(next)
    }

    /// Removes a task and closes the gap it leaves in its column.
    pub fn delete_task(&self, task_id: TaskId) -> Board {
        let Some(task) = self.task(task_id) else {
            return self.clone();
        };
        let status_id = task.status_id;

        let mut next = self.clone();
        next.tasks.retain(|t| t.id != task_id);
        next.tasks = query::reorder_tasks_in_status(next.tasks, status_id);
        next.updated_at = Utc::now();
        next
    }

    /// Adds a column at the start (shifting every existing column down) or
    /// at the end (one past the highest order in use).
    pub fn add_status(&self, mut status: Status, position: StatusPosition) -> Board {
        let mut next = self.clone();
        match position {
            StatusPosition::Start => {
                for existing in &mut next.statuses {
                    existing.update_order(existing.order + 1);
                }
                status.order = 0;
            }
            StatusPosition::End => {
                let max_order = next.statuses.iter().map(|s| s.order).max().unwrap_or(-1);
                status.order = max_order + 1;
            }
        }
        next.statuses.push(status);
        next.updated_at = Utc::now();
        next
    }

    /// A column can only be deleted once no task references it.
    pub fn delete_status(&self, status_id: StatusId) -> TaskboardResult<Board> {
        let task_count = self
            .tasks
            .iter()
            .filter(|t| t.status_id == status_id)
            .count();
        if task_count > 0 {
            return Err(TaskboardError::Invariant(format!(
                "cannot delete a column that still has {task_count} tasks; move or delete them first"
            )));
        }

        let mut next = self.clone();
        next.statuses.retain(|s| s.id != status_id);
        next.updated_at = Utc::now();
        Ok(next)
    }

    /// Splice-moves the active column into the slot occupied by the over
    /// column, then renumbers every column to its list position. Both
    /// indices are resolved before the splice, so an active column earlier
    /// in the list lands just after the over column. Unknown ids return the
    /// board unchanged.
    pub fn reorder_columns(&self, active_id: StatusId, over_id: StatusId) -> Board {
        let active_index = self.statuses.iter().position(|s| s.id == active_id);
        let over_index = self.statuses.iter().position(|s| s.id == over_id);
        let (Some(active_index), Some(over_index)) = (active_index, over_index) else {
            return self.clone();
        };

        let mut next = self.clone();
        let active = next.statuses.remove(active_index);
        next.statuses.insert(over_index, active);
        for (index, status) in next.statuses.iter_mut().enumerate() {
            if status.order != index as i32 {
                status.update_order(index as i32);
            }
        }
        next.updated_at = Utc::now();
        next
    }

    pub fn update_column(&self, column_id: StatusId, updates: StatusUpdate) -> Board {
        let mut next = self.clone();
        match next.statuses.iter_mut().find(|s| s.id == column_id) {
            Some(status) => status.apply_update(updates),
            None => return next,
        }
        next.updated_at = Utc::now();
        next
    }

    /// Attaches a rule to a column. Unknown columns return the board
    /// unchanged.
    pub fn add_automation(&self, status_id: StatusId, rule: AutomationRule) -> Board {
        let mut next = self.clone();
        match next.statuses.iter_mut().find(|s| s.id == status_id) {
            Some(status) => status.automations.push(rule),
            None => return next,
        }
        next.updated_at = Utc::now();
        next
    }

    /// Attaches a rule to the board itself. Board-level rules run before
    /// column rules.
    pub fn add_global_automation(&self, rule: AutomationRule) -> Board {
        let mut next = self.clone();
        next.global_automations.push(rule);
        next.updated_at = Utc::now();
        next
    }

    pub fn set_automation_enabled(
        &self,
        status_id: StatusId,
        rule_id: RuleId,
        enabled: bool,
    ) -> Board {
        let mut next = self.clone();
        let rule = next
            .statuses
            .iter_mut()
            .find(|s| s.id == status_id)
            .and_then(|s| s.automations.iter_mut().find(|r| r.id == rule_id));
        match rule {
            Some(rule) => rule.set_enabled(enabled),
            None => return next,
        }
        next.updated_at = Utc::now();
        next
    }
}
