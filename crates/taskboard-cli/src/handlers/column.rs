use crate::cli::ColumnAction;
use crate::context::CliContext;
use crate::output;
use taskboard_domain::{Status, StatusPosition, StatusUpdate};

pub async fn handle(file_path: &str, action: ColumnAction) -> anyhow::Result<()> {
    let mut ctx = CliContext::load(file_path).await?;

    match action {
        ColumnAction::Add {
            name,
            color,
            at_start,
        } => {
            let position = if at_start {
                StatusPosition::Start
            } else {
                StatusPosition::End
            };
            let status = Status::new(name, color, 0);
            let status_id = status.id;
            ctx.apply(ctx.board.add_status(status, position));
            ctx.save().await?;
            output::output_success(ctx.board.status(status_id));
        }
        ColumnAction::List => {
            let mut columns = ctx.board.statuses.clone();
            columns.sort_by_key(|s| s.order);
            output::output_list(columns);
        }
        ColumnAction::Update { id, name, color } => {
            if ctx.board.status(id).is_none() {
                output::output_error(&format!("Column not found: {id}"));
            }
            ctx.apply(ctx.board.update_column(id, StatusUpdate { name, color }));
            ctx.save().await?;
            output::output_success(ctx.board.status(id));
        }
        ColumnAction::Delete { id } => match ctx.board.delete_status(id) {
            Ok(next) => {
                ctx.apply(next);
                ctx.save().await?;
                output::output_success(serde_json::json!({ "deleted": id }));
            }
            Err(e) => output::output_error(&e.to_string()),
        },
        ColumnAction::Reorder {
            active_id,
            over_id,
        } => {
            if ctx.board.status(active_id).is_none() || ctx.board.status(over_id).is_none() {
                output::output_error("Column not found");
            }
            ctx.apply(ctx.board.reorder_columns(active_id, over_id));
            ctx.save().await?;
            let mut columns = ctx.board.statuses.clone();
            columns.sort_by_key(|s| s.order);
            output::output_list(columns);
        }
    }
    Ok(())
}
