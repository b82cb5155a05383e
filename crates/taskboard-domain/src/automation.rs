use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::status::StatusId;

pub type RuleId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    MoveTo,
    MoveFrom,
    /// Reserved. Accepted in rule definitions but never evaluated.
    TimeBased,
}

/// A single automation effect, serialized as `{"type": ..., "config": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
pub enum AutomationAction {
    AddTag {
        tag: String,
    },
    RemoveTag {
        tag: String,
    },
    UpdateField {
        field: String,
        value: Value,
    },
    Notification {
        #[serde(default)]
        message: Option<String>,
    },
    /// Reserved. Accepted in rule definitions, skipped at execution.
    Webhook {
        url: String,
    },
    /// Reserved. Accepted in rule definitions, skipped at execution.
    MoveTask {
        to_status_id: StatusId,
    },
}

/// Trigger endpoints and actions handed to [`AutomationRule::new`].
#[derive(Debug, Clone, Default)]
pub struct RuleConfig {
    pub from_status_id: Option<StatusId>,
    pub to_status_id: Option<StatusId>,
    pub actions: Vec<AutomationAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationRule {
    pub id: RuleId,
    pub name: String,
    pub trigger: TriggerKind,
    #[serde(default)]
    pub from_status_id: Option<StatusId>,
    #[serde(default)]
    pub to_status_id: Option<StatusId>,
    #[serde(default)]
    pub actions: Vec<AutomationAction>,
    pub enabled: bool,
}

impl AutomationRule {
    /// Only the endpoint relevant to the trigger is kept, so a rule can
    /// never carry a source column with a move-to trigger or vice versa.
    pub fn new(name: String, trigger: TriggerKind, config: RuleConfig) -> Self {
        let (from_status_id, to_status_id) = match trigger {
            TriggerKind::MoveTo => (None, config.to_status_id),
            TriggerKind::MoveFrom => (config.from_status_id, None),
            TriggerKind::TimeBased => (None, None),
        };
        Self {
            id: Uuid::new_v4(),
            name,
            trigger,
            from_status_id,
            to_status_id,
            actions: config.actions,
            enabled: true,
        }
    }

    /// Whether this rule fires for a move between the given columns.
    pub fn matches(&self, from_status_id: StatusId, to_status_id: StatusId) -> bool {
        if !self.enabled {
            return false;
        }
        match self.trigger {
            TriggerKind::MoveTo => self.to_status_id == Some(to_status_id),
            TriggerKind::MoveFrom => self.from_status_id == Some(from_status_id),
            TriggerKind::TimeBased => false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_keeps_only_relevant_endpoint() {
        let column = Uuid::new_v4();
        let other = Uuid::new_v4();

        let move_to = AutomationRule::new(
            "to".to_string(),
            TriggerKind::MoveTo,
            RuleConfig {
                from_status_id: Some(other),
                to_status_id: Some(column),
                actions: Vec::new(),
            },
        );
        assert_eq!(move_to.to_status_id, Some(column));
        assert_eq!(move_to.from_status_id, None);
        assert!(move_to.enabled);

        let move_from = AutomationRule::new(
            "from".to_string(),
            TriggerKind::MoveFrom,
            RuleConfig {
                from_status_id: Some(column),
                to_status_id: Some(other),
                actions: Vec::new(),
            },
        );
        assert_eq!(move_from.from_status_id, Some(column));
        assert_eq!(move_from.to_status_id, None);
    }

    #[test]
    fn test_matches_by_trigger_kind() {
        let from = Uuid::new_v4();
        let to = Uuid::new_v4();

        let rule = AutomationRule::new(
            "to".to_string(),
            TriggerKind::MoveTo,
            RuleConfig {
                to_status_id: Some(to),
                ..Default::default()
            },
        );
        assert!(rule.matches(from, to));
        assert!(!rule.matches(to, from));

        let rule = AutomationRule::new(
            "from".to_string(),
            TriggerKind::MoveFrom,
            RuleConfig {
                from_status_id: Some(from),
                ..Default::default()
            },
        );
        assert!(rule.matches(from, to));
        assert!(!rule.matches(to, from));
    }

    #[test]
    fn test_disabled_rule_never_matches() {
        let to = Uuid::new_v4();
        let mut rule = AutomationRule::new(
            "to".to_string(),
            TriggerKind::MoveTo,
            RuleConfig {
                to_status_id: Some(to),
                ..Default::default()
            },
        );
        rule.set_enabled(false);
        assert!(!rule.matches(Uuid::new_v4(), to));
    }

    #[test]
    fn test_time_based_never_matches() {
        let rule = AutomationRule::new(
            "someday".to_string(),
            TriggerKind::TimeBased,
            RuleConfig::default(),
        );
        assert!(!rule.matches(Uuid::new_v4(), Uuid::new_v4()));
    }

    #[test]
    fn test_action_wire_format() {
        let action = AutomationAction::AddTag {
            tag: "completed".to_string(),
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({"type": "add_tag", "config": {"tag": "completed"}})
        );
    }
}
