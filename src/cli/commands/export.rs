//! Export command handler
//!
//! Saves the result card as HTML, Markdown, or plain text.

use crate::args::{CalcArgs, CardFormatArg};
use gangnam_apt::config::Config;
use gangnam_apt::core::card::{export_file_name, renderer_for, CardContext, CardFormat};
use logger::{error, info};
use std::fs;
use std::path::Path;

impl From<CardFormatArg> for CardFormat {
    fn from(arg: CardFormatArg) -> Self {
        match arg {
            CardFormatArg::Html => Self::Html,
            CardFormatArg::Md => Self::Markdown,
            CardFormatArg::Txt => Self::Text,
        }
    }
}

/// Run the export command.
///
/// Failures are logged and reported on stderr; they never abort the process.
pub fn run(input: &CalcArgs, format: CardFormatArg, output: Option<&Path>, config: &Config) {
    let Some(result) = super::calculate(input, config) else {
        return;
    };

    let format = CardFormat::from(format);
    let output_path = output.map_or_else(
        || config.exports_dir().join(export_file_name(format)),
        Path::to_path_buf,
    );

    let ctx = CardContext::new(&result, &config.share.origin);
    match write_card(&ctx, format, &output_path) {
        Ok(()) => {
            info!("Card exported as {format}: {}", output_path.display());
            println!("✓ Card saved: {}", output_path.display());
        }
        Err(e) => {
            error!("Card export failed for {}: {e}", output_path.display());
            eprintln!("✗ Failed to save card to {}: {e}", output_path.display());
        }
    }
}

/// Render `ctx` in `format` and write it, creating parent directories.
fn write_card(
    ctx: &CardContext,
    format: CardFormat,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    renderer_for(format).generate(ctx, output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_arg_conversion() {
        assert_eq!(CardFormat::from(CardFormatArg::Html), CardFormat::Html);
        assert_eq!(CardFormat::from(CardFormatArg::Md), CardFormat::Markdown);
        assert_eq!(CardFormat::from(CardFormatArg::Txt), CardFormat::Text);
    }

    #[test]
    fn test_export_writes_default_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::from_toml("").unwrap();
        config.paths.exports_dir = dir.path().join("cards").to_string_lossy().to_string();
        config.share.origin = "https://gangnam-apt.vercel.app".to_string();

        let input = CalcArgs {
            income: Some("300".to_string()),
            region: Some("gangnam".to_string()),
            savings_rate: Some(100),
            from_link: None,
        };
        run(&input, CardFormatArg::Md, None, &config);

        let written = dir.path().join("cards").join("강남아파트_계산결과.md");
        let content = fs::read_to_string(written).unwrap();
        assert!(content.contains("83년 4개월"));
    }
}
