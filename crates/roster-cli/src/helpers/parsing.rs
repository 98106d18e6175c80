//! Parsing helpers for flag values.

use std::str::FromStr;

/// Output format for list-like commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "plain" => Ok(Self::Plain),
            other => Err(anyhow::anyhow!(
                "Invalid format: {} (expected table or plain)",
                other
            )),
        }
    }
}

/// Parse `--format`, rejecting it alongside `--json`.
pub fn parse_output_format(json: bool, value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    let Some(value) = value else {
        return Ok(None);
    };
    if json {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }
    value.parse().map(Some)
}

/// Map a user-typed choice onto its canonical spelling.
///
/// Matching ignores case and surrounding whitespace. Values that match no
/// option are returned trimmed but otherwise unchanged, so the validator can
/// report them.
pub fn canonical_choice(value: &str, options: &[&str]) -> String {
    let trimmed = value.trim();
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(trimmed))
        .map(|option| option.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(false, None).unwrap(), None);
        assert_eq!(
            parse_output_format(false, Some("PLAIN")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert_eq!(
            parse_output_format(false, Some("table")).unwrap(),
            Some(OutputFormat::Table)
        );
        assert!(parse_output_format(false, Some("csv")).is_err());
        assert!(parse_output_format(true, Some("plain")).is_err());
    }

    #[test]
    fn test_canonical_choice() {
        let options = ["Gujarat", "Maharashtra"];
        assert_eq!(canonical_choice(" gujarat ", &options), "Gujarat");
        assert_eq!(canonical_choice("MAHARASHTRA", &options), "Maharashtra");
        assert_eq!(canonical_choice("Kerala", &options), "Kerala");
    }
}
