//! Input and parsing helper functions for the CLI.
//!
//! - Interactive person field prompts and confirmations (`fields`)
//! - Flag value parsing (`parsing`)

mod fields;
mod parsing;

pub use fields::{confirm, is_interactive, prompt_missing_fields};
pub use parsing::{canonical_choice, parse_output_format, OutputFormat};
