use crate::cli::{AutomationCliAction, TriggerArg};
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use taskboard_domain::{AutomationAction, AutomationRule, RuleConfig, StatusId, TriggerKind};

#[derive(Serialize)]
struct RuleListing {
    scope: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_id: Option<StatusId>,
    rule: AutomationRule,
}

pub async fn handle(file_path: &str, action: AutomationCliAction) -> anyhow::Result<()> {
    let mut ctx = CliContext::load(file_path).await?;

    match action {
        AutomationCliAction::Add {
            name,
            trigger,
            status_id,
            global,
            from_status_id,
            to_status_id,
            actions,
        } => {
            let actions: Vec<AutomationAction> = match serde_json::from_str(&actions) {
                Ok(actions) => actions,
                Err(e) => output::output_error(&format!("invalid actions JSON: {e}")),
            };
            let trigger = match trigger {
                TriggerArg::MoveTo => TriggerKind::MoveTo,
                TriggerArg::MoveFrom => TriggerKind::MoveFrom,
            };
            let rule = AutomationRule::new(
                name,
                trigger,
                RuleConfig {
                    from_status_id,
                    to_status_id,
                    actions,
                },
            );
            let rule_id = rule.id;

            if global {
                ctx.apply(ctx.board.add_global_automation(rule));
                ctx.save().await?;
                let rule = ctx
                    .board
                    .global_automations
                    .iter()
                    .find(|r| r.id == rule_id);
                output::output_success(rule);
            } else {
                // clap guarantees status_id is present when --global is absent
                let Some(status_id) = status_id else {
                    output::output_error("--status-id or --global is required");
                };
                if ctx.board.status(status_id).is_none() {
                    output::output_error(&format!("Column not found: {status_id}"));
                }
                ctx.apply(ctx.board.add_automation(status_id, rule));
                ctx.save().await?;
                let rule = ctx
                    .board
                    .status(status_id)
                    .and_then(|s| s.automations.iter().find(|r| r.id == rule_id));
                output::output_success(rule);
            }
        }
        AutomationCliAction::List => {
            let mut listings: Vec<RuleListing> = ctx
                .board
                .global_automations
                .iter()
                .map(|rule| RuleListing {
                    scope: "global",
                    status_id: None,
                    rule: rule.clone(),
                })
                .collect();
            for status in &ctx.board.statuses {
                for rule in &status.automations {
                    listings.push(RuleListing {
                        scope: "column",
                        status_id: Some(status.id),
                        rule: rule.clone(),
                    });
                }
            }
            output::output_list(listings);
        }
        AutomationCliAction::Toggle {
            status_id,
            rule_id,
            enabled,
        } => {
            let known = ctx
                .board
                .status(status_id)
                .map(|s| s.automations.iter().any(|r| r.id == rule_id))
                .unwrap_or(false);
            if !known {
                output::output_error(&format!("Rule not found: {rule_id}"));
            }
            ctx.apply(ctx.board.set_automation_enabled(status_id, rule_id, enabled));
            ctx.save().await?;
            let rule = ctx
                .board
                .status(status_id)
                .and_then(|s| s.automations.iter().find(|r| r.id == rule_id));
            output::output_success(rule);
        }
    }
    Ok(())
}
