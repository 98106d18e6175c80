//! Interactive prompts for person fields.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use roster_core::validation::check_field;
use roster_core::{cities_for, states, Field, NewPerson};

/// Whether prompts may be shown.
pub fn is_interactive(no_input: bool) -> bool {
    !no_input && std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Prompt for every field of `candidate` that is still empty.
///
/// Text fields re-prompt until the value passes its rule. State and city are
/// chosen from the region table; the city list follows the chosen state.
pub fn prompt_missing_fields(candidate: &mut NewPerson) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();

    for field in candidate.missing_fields() {
        // An earlier state prompt may have filled or cleared the city.
        if !candidate.get(field).is_empty() {
            continue;
        }
        match field {
            Field::State => {
                let options = states();
                let index = Select::with_theme(&theme)
                    .with_prompt(field.label())
                    .items(&options[..])
                    .default(0)
                    .interact()?;
                candidate.set(Field::State, options[index]);
            }
            Field::City => {
                let options = cities_for(&candidate.state);
                if options.is_empty() {
                    // No state chosen yet; validation reports the state.
                    continue;
                }
                let index = Select::with_theme(&theme)
                    .with_prompt(field.label())
                    .items(options)
                    .default(0)
                    .interact()?;
                candidate.set(Field::City, options[index]);
            }
            _ => {
                let snapshot = candidate.clone();
                let value: String = Input::with_theme(&theme)
                    .with_prompt(field.label())
                    .validate_with(move |input: &String| -> Result<(), String> {
                        let probe = snapshot.clone().with(field, input.as_str());
                        check_field(&probe, field).map_err(|e| e.message)
                    })
                    .interact_text()?;
                candidate.set(field, value);
            }
        }
    }

    Ok(())
}

/// Ask for a yes/no confirmation; defaults to "no".
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
