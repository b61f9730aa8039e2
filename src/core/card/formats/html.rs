//! HTML card generator
//!
//! Renders the card as a single self-contained page (inline CSS, no scripts)
//! through the `templates/card.html` askama template.

use crate::core::card::{count_label, CardContext, CardRenderer};
use crate::core::calculator::Comparison;
use crate::core::level::Level;
use askama::Template;
use std::error::Error;

/// One comparison, pre-formatted for the template.
struct Tile {
    emoji: &'static str,
    count: String,
    unit: &'static str,
    label: &'static str,
}

impl From<&Comparison> for Tile {
    fn from(comparison: &Comparison) -> Self {
        Self {
            emoji: comparison.item.emoji,
            count: count_label(comparison),
            unit: comparison.item.unit,
            label: comparison.item.label,
        }
    }
}

#[derive(Template)]
#[template(path = "card.html")]
struct CardPage<'a> {
    level: &'a Level,
    headline: String,
    duration: String,
    title: String,
    featured: Vec<Tile>,
    others: Vec<Tile>,
    watermark: &'a str,
}

/// HTML card generator
pub struct HtmlCard;

impl HtmlCard {
    /// Create a new HTML card generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlCard {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer for HtmlCard {
    fn render(&self, ctx: &CardContext) -> Result<String, Box<dyn Error>> {
        let page = CardPage {
            level: &ctx.level,
            headline: ctx.headline(),
            duration: ctx.duration(),
            title: ctx.comparisons_title(),
            featured: ctx.featured().iter().map(Tile::from).collect(),
            others: ctx.others().iter().map(Tile::from).collect(),
            watermark: &ctx.watermark,
        };
        Ok(page.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::compute;
    use crate::core::catalog::find_region;

    #[test]
    fn test_html_card_contains_result() {
        let result = compute(500, 50, find_region("pangyo").unwrap()).unwrap();
        let ctx = CardContext::new(&result, "https://gangnam-apt.vercel.app");
        let html = HtmlCard::new().render(&ctx).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("26년 8개월"));
        assert!(html.contains("😤 노력 레벨"));
        assert!(html.contains("#fbbf24"));
        assert!(html.contains("열심히 사세요 ^^"));
        assert!(html.contains("8억으로 대신 살 수 있는 것들"));
        assert!(html.contains("포르쉐 카이엔"));
        assert!(html.contains("gangnam-apt.vercel.app"));
    }
}
