//! Output mode routing logic.

use crate::helpers::OutputFormat;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// Plain text, stable for scripts and pipes
    #[default]
    Plain,
    /// Colors, tables and badges (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// 1. `--json` wins over everything
    /// 2. `--format plain` forces plain
    /// 3. `TERM=dumb` forces plain
    /// 4. `--format table` forces a table even when piped
    /// 5. otherwise pretty on a TTY, plain elsewhere
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format == Some(OutputFormat::Plain) || term_is_dumb {
            return Self::Plain;
        }
        if is_tty || format == Some(OutputFormat::Table) {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_format_forces_plain_on_tty() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        assert_eq!(OutputMode::resolve(false, None, true, true), OutputMode::Plain);
    }

    #[test]
    fn test_tty_defaults() {
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Pretty);
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), true, false),
            OutputMode::Pretty
        );
        assert_eq!(OutputMode::resolve(false, None, false, false), OutputMode::Plain);
    }

    #[test]
    fn test_table_format_when_piped() {
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), false, false),
            OutputMode::Pretty
        );
    }
}
