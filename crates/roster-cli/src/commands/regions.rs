use roster_core::{cities_for, states};

use crate::app::AppContext;
use crate::cli::RegionsArgs;
use crate::errors::CliError;
use crate::helpers::canonical_choice;
use crate::ui::{print, table, Column};

pub fn handle_regions(ctx: &AppContext, args: &RegionsArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);

    let Some(ref requested) = args.state else {
        if args.json {
            let value: Vec<_> = states()
                .into_iter()
                .map(|state| serde_json::json!({ "state": state, "cities": cities_for(state) }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            let rows: Vec<Vec<String>> = states()
                .into_iter()
                .map(|state| vec![state.to_string(), cities_for(state).join(", ")])
                .collect();
            print(
                &ui_ctx,
                &table(&ui_ctx, &[Column::new("State"), Column::new("Cities")], &rows),
            );
        }
        return Ok(());
    };

    let state = canonical_choice(requested, &states());
    let cities = cities_for(&state);
    if cities.is_empty() {
        return Err(CliError::not_found(
            format!("Unknown state: {}", requested.trim()),
            format!("Known states: {}", states().join(", ")),
        )
        .into());
    }

    if args.json {
        let value = serde_json::json!({ "state": state, "cities": cities });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        let rows: Vec<Vec<String>> = cities.iter().map(|city| vec![city.to_string()]).collect();
        print(&ui_ctx, &table(&ui_ctx, &[Column::new("City")], &rows));
    }
    Ok(())
}
