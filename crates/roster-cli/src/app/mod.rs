//! Application-level utilities for the Roster CLI.
//!
//! This module provides:
//! - Path resolution for the config file and data directory
//! - The per-invocation `AppContext`

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_data_dir};
