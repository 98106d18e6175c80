use roster_core::{cities_for, states, validate_all, Field, NewPerson};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{canonical_choice, is_interactive, prompt_missing_fields};
use crate::output::person_json;
use crate::ui::{header, print, receipt, Badge};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let mut candidate = candidate_from_args(args);

    if !candidate.missing_fields().is_empty() && is_interactive(args.no_input) {
        if !ctx.quiet() && ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &header(&ui_ctx, "add", None));
        }
        prompt_missing_fields(&mut candidate)?;
    }

    let errors = validate_all(&candidate);
    if let Some(first) = errors.first() {
        return Err(CliError::rejected(first, &errors).into());
    }

    let mut store = ctx.open_store()?;
    let person = store.add(&candidate)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&person_json(&person))?);
    } else if ctx.quiet() {
        println!("{}", person.id);
    } else {
        let id = person.id.to_string();
        let name = person.full_name();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                Badge::Ok,
                "Added person",
                &[("ID", id.as_str()), ("Name", name.as_str())],
            ),
        );
    }
    Ok(())
}

/// Candidate built from flags. State and city are matched case-insensitively
/// against the region table so `--state gujarat` stores `Gujarat`.
fn candidate_from_args(args: &AddArgs) -> NewPerson {
    let values = [
        (Field::FirstName, &args.first_name),
        (Field::LastName, &args.last_name),
        (Field::Email, &args.email),
        (Field::Phone, &args.phone),
        (Field::State, &args.state),
        (Field::City, &args.city),
    ];

    let mut candidate = NewPerson::new();
    for (field, value) in values {
        let Some(value) = value.as_deref() else {
            continue;
        };
        let value = match field {
            Field::State => canonical_choice(value, &states()),
            Field::City => canonical_choice(value, cities_for(&candidate.state)),
            _ => value.trim().to_string(),
        };
        candidate.set(field, value);
    }
    candidate
}
