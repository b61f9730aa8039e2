//! Card format implementations
//!
//! Provides renderers for the supported card formats: HTML, Markdown and plain text.

pub mod html;
pub mod markdown;
pub mod text;

pub use html::HtmlCard;
pub use markdown::MarkdownCard;
pub use text::TextCard;

use std::fmt;
use std::str::FromStr;

/// Supported card formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFormat {
    /// Self-contained HTML page styled like the on-screen card
    #[default]
    Html,
    /// Markdown with a comparison table
    Markdown,
    /// Plain text, as printed by `calc`
    Text,
}

impl CardFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Text => "txt",
        }
    }
}

impl FromStr for CardFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "md" | "markdown" => Ok(Self::Markdown),
            "txt" | "text" => Ok(Self::Text),
            _ => Err(format!("Unknown card format: {s}")),
        }
    }
}

impl fmt::Display for CardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Text => write!(f, "text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("HTML".parse::<CardFormat>(), Ok(CardFormat::Html));
        assert_eq!("md".parse::<CardFormat>(), Ok(CardFormat::Markdown));
        assert_eq!("text".parse::<CardFormat>(), Ok(CardFormat::Text));
        assert!("png".parse::<CardFormat>().is_err());
    }
}
