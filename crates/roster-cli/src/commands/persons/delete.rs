use roster_core::PersonId;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::{confirm, is_interactive};
use crate::ui::{badge, print, receipt, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let id = PersonId::new(args.id.trim());
    let mut store = ctx.open_store()?;

    // Deleting an unknown id is a no-op, not a failure.
    let Some(person) = store.get(&id) else {
        if !ctx.quiet() {
            print(
                &ui_ctx,
                &receipt(
                    &ui_ctx,
                    Badge::Warn,
                    "No person with that ID",
                    &[("ID", id.as_str())],
                ),
            );
        }
        return Ok(());
    };

    if !args.yes {
        if !is_interactive(args.no_input) {
            return Err(CliError::invalid_input_with_hint(
                "Refusing to delete without confirmation",
                "Pass --yes to delete without a prompt",
            )
            .into());
        }
        let prompt = format!("Delete {} ({})?", person.full_name(), person.id);
        if !confirm(&prompt)? {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("status=cancelled");
                    }
                }
            }
            return Ok(());
        }
    }

    store.delete_by_id(&id)?;

    if !ctx.quiet() {
        let name = person.full_name();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                Badge::Ok,
                "Deleted person",
                &[("ID", id.as_str()), ("Name", name.as_str())],
            ),
        );
    }
    Ok(())
}
