//! Result card rendering
//!
//! A result card is the shareable summary of one calculation: tier badge,
//! duration, commentary and what the apartment price would buy instead. Cards
//! can be rendered as self-contained HTML, Markdown, or plain text and saved
//! under a fixed file name.

pub mod formats;

use crate::core::calculator::{CalculationResult, Comparison};
use crate::core::format::{format_duration, format_magnitude, group_digits, price_label};
use crate::core::level::{classify_level, Level};
use crate::core::share::watermark;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{CardFormat, HtmlCard, MarkdownCard, TextCard};

/// File stem used for saved cards.
pub const EXPORT_FILE_STEM: &str = "강남아파트_계산결과";

/// Number of comparisons shown as large tiles; the rest are compact rows.
pub const FEATURED_COMPARISONS: usize = 2;

/// Everything a card template needs, derived from one result.
#[derive(Debug, Clone)]
pub struct CardContext<'a> {
    /// The calculation being shown
    pub result: &'a CalculationResult,
    /// Tier for the result's duration
    pub level: Level,
    /// Host printed at the bottom of the card
    pub watermark: String,
}

impl<'a> CardContext<'a> {
    /// Build the context for `result`, watermarked with the host of `origin`.
    #[must_use]
    pub fn new(result: &'a CalculationResult, origin: &str) -> Self {
        Self {
            result,
            level: classify_level(result.months),
            watermark: watermark(origin),
        }
    }

    /// Region price in whole 억 (`"30억"`).
    #[must_use]
    pub fn price_label(&self) -> String {
        price_label(self.result.region.price)
    }

    /// `월급 300만원 · 100% 저축 · 강남 아파트 (30억)`
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "월급 {}만원 · {}% 저축 · {} 아파트 ({})",
            group_digits(self.result.monthly_income),
            self.result.savings_rate,
            self.result.region.label,
            self.price_label()
        )
    }

    /// Formatted saving duration.
    #[must_use]
    pub fn duration(&self) -> String {
        format_duration(self.result.months)
    }

    /// Title above the comparison grid.
    #[must_use]
    pub fn comparisons_title(&self) -> String {
        format!("{}으로 대신 살 수 있는 것들", self.price_label())
    }

    /// Comparisons shown as large tiles.
    #[must_use]
    pub fn featured(&self) -> &[Comparison] {
        let split = FEATURED_COMPARISONS.min(self.result.comparisons.len());
        &self.result.comparisons[..split]
    }

    /// Comparisons shown as compact rows.
    #[must_use]
    pub fn others(&self) -> &[Comparison] {
        let split = FEATURED_COMPARISONS.min(self.result.comparisons.len());
        &self.result.comparisons[split..]
    }
}

/// Abbreviated count for a comparison (`"17만"`).
#[must_use]
pub fn count_label(comparison: &Comparison) -> String {
    format_magnitude(comparison.count)
}

/// File name for a saved card in `format`.
#[must_use]
pub fn export_file_name(format: CardFormat) -> String {
    format!("{EXPORT_FILE_STEM}.{}", format.extension())
}

/// Renders a card in one output format.
pub trait CardRenderer {
    /// Render the card to a string.
    ///
    /// # Errors
    /// Returns an error if rendering fails.
    fn render(&self, ctx: &CardContext) -> Result<String, Box<dyn Error>>;

    /// Render the card and write it to `output_path`.
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails.
    fn generate(&self, ctx: &CardContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Renderer for `format`.
#[must_use]
pub fn renderer_for(format: CardFormat) -> Box<dyn CardRenderer> {
    match format {
        CardFormat::Html => Box::new(HtmlCard::new()),
        CardFormat::Markdown => Box::new(MarkdownCard::new()),
        CardFormat::Text => Box::new(TextCard::new()),
    }
}
