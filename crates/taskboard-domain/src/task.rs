use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use taskboard_core::{TaskboardError, TaskboardResult};

use crate::status::StatusId;

pub type TaskId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status_id: StatusId,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl Task {
    /// The title is trimmed and must be non-empty; the initial order is a
    /// placeholder that the column renumbering corrects on insert.
    pub fn new(title: String, description: String, status_id: StatusId) -> TaskboardResult<Self> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(TaskboardError::Validation(
                "task title must not be empty".to_string(),
            ));
        }
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            status_id,
            order: 0,
            created_at: now,
            updated_at: now,
            tags: Vec::new(),
            metadata: HashMap::new(),
        })
    }

    /// Appends `tag` unless it is empty or already present. A skipped tag
    /// leaves the task untouched, timestamp included.
    pub fn add_tag(&mut self, tag: &str) {
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return;
        }
        self.tags.push(tag.to_string());
        self.updated_at = Utc::now();
    }

    /// Removes every occurrence of `tag`. Removing an absent tag still
    /// counts as an update.
    pub fn remove_tag(&mut self, tag: &str) {
        if tag.is_empty() {
            return;
        }
        self.tags.retain(|t| t != tag);
        self.updated_at = Utc::now();
    }

    /// Overwrites a named field. Title and description map onto the typed
    /// fields when given a string; any other field lands in metadata.
    pub fn set_field(&mut self, field: &str, value: Value) {
        match (field, value) {
            ("title", Value::String(title)) => self.title = title,
            ("description", Value::String(description)) => self.description = description,
            (field, value) => {
                self.metadata.insert(field.to_string(), value);
            }
        }
        self.updated_at = Utc::now();
    }

    pub fn apply_update(&mut self, updates: TaskUpdate) -> TaskboardResult<()> {
        if let Some(title) = updates.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(TaskboardError::Validation(
                    "task title must not be empty".to_string(),
                ));
            }
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(tags) = updates.tags {
            self.tags.clear();
            for tag in tags {
                if !self.tags.contains(&tag) {
                    self.tags.push(tag);
                }
            }
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Partial update for a task; `None` keeps the existing value.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}
