//! Text and table output formatting for persons.

use roster_core::{Field, Person};

use crate::ui::{badge, print, table, Badge, Column, OutputMode, UiContext};

use super::json::persons_json;

pub const PERSON_COLUMNS: [Column; 7] = [
    Column::new("ID"),
    Column::new("First Name"),
    Column::new("Last Name"),
    Column::new("Email"),
    Column::new("Phone"),
    Column::new("State"),
    Column::new("City"),
];

/// Notice for an empty `list`.
pub const EMPTY_LIST: &str = "No persons found.";

/// Notice for a `search` with no matches.
pub const EMPTY_SEARCH: &str = "No persons found matching your search criteria.";

fn person_row(person: &Person) -> Vec<String> {
    let details = person.to_candidate();
    let mut row = Vec::with_capacity(PERSON_COLUMNS.len());
    row.push(person.id.to_string());
    row.extend(Field::ALL.iter().map(|field| details.get(*field).to_string()));
    row
}

/// Render persons as a tab-separated listing or a table.
///
/// Returns `None` when nothing should be printed: plain mode with no rows,
/// so scripts see no output, or a quiet empty result.
fn render_person_list(
    ctx: &UiContext,
    persons: &[&Person],
    quiet: bool,
    empty_message: &str,
) -> Option<String> {
    if persons.is_empty() {
        return match ctx.mode {
            OutputMode::Pretty if !quiet => Some(badge(ctx, Badge::Info, empty_message)),
            _ => None,
        };
    }
    let rows: Vec<Vec<String>> = persons.iter().map(|p| person_row(p)).collect();
    Some(table(ctx, &PERSON_COLUMNS, &rows))
}

/// Print persons as JSON, a tab-separated listing, or a table.
pub fn print_person_list(
    ctx: &UiContext,
    persons: &[&Person],
    quiet: bool,
    empty_message: &str,
) -> anyhow::Result<()> {
    match ctx.mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&persons_json(persons))?);
        }
        OutputMode::Plain => {
            if let Some(text) = render_person_list(ctx, persons, quiet, empty_message) {
                println!("{}", text);
            }
        }
        OutputMode::Pretty => {
            if let Some(text) = render_person_list(ctx, persons, quiet, empty_message) {
                print(ctx, &text);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{NewPerson, PersonId};

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 120,
            mode,
        }
    }

    fn grace() -> Person {
        let candidate = NewPerson::new()
            .with(Field::FirstName, "Grace")
            .with(Field::LastName, "Hopper")
            .with(Field::Email, "grace@example.com")
            .with(Field::Phone, "1234567890")
            .with(Field::State, "Maharashtra")
            .with(Field::City, "Pune");
        roster_core::validate(&candidate)
            .unwrap()
            .into_person(PersonId::new("g1"))
    }

    #[test]
    fn test_row_follows_column_order() {
        let row = person_row(&grace());
        assert_eq!(row.len(), PERSON_COLUMNS.len());
        assert_eq!(
            row,
            vec![
                "g1",
                "Grace",
                "Hopper",
                "grace@example.com",
                "1234567890",
                "Maharashtra",
                "Pune"
            ]
        );
    }

    #[test]
    fn test_empty_search_notice_in_pretty_mode() {
        let out = render_person_list(&ctx(OutputMode::Pretty), &[], false, EMPTY_SEARCH);
        assert_eq!(
            out.as_deref(),
            Some("[INFO] No persons found matching your search criteria.")
        );
    }

    #[test]
    fn test_empty_result_is_silent_in_plain_or_quiet() {
        assert_eq!(
            render_person_list(&ctx(OutputMode::Plain), &[], false, EMPTY_LIST),
            None
        );
        assert_eq!(
            render_person_list(&ctx(OutputMode::Pretty), &[], true, EMPTY_LIST),
            None
        );
    }

    #[test]
    fn test_plain_rows_are_tab_separated() {
        let person = grace();
        let out = render_person_list(&ctx(OutputMode::Plain), &[&person], false, EMPTY_LIST);
        assert_eq!(
            out.as_deref(),
            Some("g1\tGrace\tHopper\tgrace@example.com\t1234567890\tMaharashtra\tPune")
        );
    }
}
