//! Common types shared by povt commands.

use std::fmt;
use std::str::FromStr;

use crate::error::PovtError;

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per token
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    /// Name used on the command line and in `povt.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PovtError;

    /// Parse a format name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" | "jsonl" => Ok(Self::Json),
            _ => Err(PovtError::Validation(format!(
                "unsupported format '{}' (expected text or json)",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: unsupported format 'yaml' (expected text or json)"
        );
    }

    #[test]
    fn test_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
