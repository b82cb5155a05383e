use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::automation::AutomationRule;

pub type StatusId = Uuid;

/// Where a new column lands relative to the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPosition {
    Start,
    #[default]
    End,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
    pub color: String,
    pub order: i32,
    #[serde(default)]
    pub automations: Vec<AutomationRule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Status {
    pub fn new(name: String, color: String, order: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            color,
            order,
            automations: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_order(&mut self, order: i32) {
        self.order = order;
        self.updated_at = Utc::now();
    }

    pub fn apply_update(&mut self, updates: StatusUpdate) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(color) = updates.color {
            self.color = color;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a column; `None` keeps the existing value.
#[derive(Debug, Clone, Default)]
pub struct StatusUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// The four columns every new board starts with. Built fresh per call so
/// each board gets its own column identities.
pub(crate) fn default_statuses() -> Vec<Status> {
    vec![
        Status::new("To Do".to_string(), "#e2e8f0".to_string(), 0),
        Status::new("In Progress".to_string(), "#fbbf24".to_string(), 1),
        Status::new("Review".to_string(), "#a78bfa".to_string(), 2),
        Status::new("Done".to_string(), "#10b981".to_string(), 3),
    ]
}
