//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying persons
//! in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::{person_json, persons_json};
pub use text::{print_person_list, EMPTY_LIST, EMPTY_SEARCH};
