//! Plain-text card generator, also used for terminal output

use crate::core::card::{count_label, CardContext, CardRenderer};
use std::error::Error;
use std::fmt::Write;

/// Width of the progress bar in characters
pub const PROGRESS_WIDTH: usize = 30;

/// Plain-text card generator
pub struct TextCard;

impl TextCard {
    /// Create a new plain-text card generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextCard {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a bar `width` cells wide filled to `percent` (0-100).
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

impl CardRenderer for TextCard {
    fn render(&self, ctx: &CardContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();

        writeln!(out, "{}", ctx.level)?;
        writeln!(out, "{}", ctx.headline())?;
        writeln!(out)?;
        writeln!(out, "  {}", ctx.duration())?;
        writeln!(out, "  {}", ctx.level.comment)?;
        writeln!(out, "  {}", progress_bar(100.0, PROGRESS_WIDTH))?;
        writeln!(out)?;
        writeln!(out, "{}", ctx.comparisons_title())?;
        for comparison in ctx.featured().iter().chain(ctx.others()) {
            writeln!(
                out,
                "  {} {}{}  {}",
                comparison.item.emoji,
                count_label(comparison),
                comparison.item.unit,
                comparison.item.label
            )?;
        }
        writeln!(out)?;
        writeln!(out, "{}", ctx.watermark)?;

        Ok(out)
    }
}
