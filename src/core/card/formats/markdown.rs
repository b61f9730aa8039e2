//! Markdown card generator
//!
//! Generates the card as Markdown with a comparison table. Renders well in
//! chat apps and note tools that accept Markdown.

use crate::core::card::{count_label, CardContext, CardRenderer};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown card template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/card.md");

/// Markdown card generator
pub struct MarkdownCard;

impl MarkdownCard {
    /// Create a new Markdown card generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the card using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &CardContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{level_emoji}}", ctx.level.emoji);
        output = output.replace("{{level_label}}", ctx.level.label);
        output = output.replace("{{headline}}", &ctx.headline());
        output = output.replace("{{duration}}", &ctx.duration());
        output = output.replace("{{comment}}", ctx.level.comment);
        output = output.replace("{{comparisons_title}}", &ctx.comparisons_title());
        output = output.replace("{{comparison_rows}}", &Self::generate_comparison_rows(ctx));
        output = output.replace("{{watermark}}", &ctx.watermark);

        output
    }

    /// One table row per comparison; featured items are bold
    fn generate_comparison_rows(ctx: &CardContext) -> String {
        let mut rows = String::new();

        for comparison in ctx.featured() {
            let _ = writeln!(
                rows,
                "| {} | **{}** | **{}{}** |",
                comparison.item.emoji,
                comparison.item.label,
                count_label(comparison),
                comparison.item.unit
            );
        }
        for comparison in ctx.others() {
            let _ = writeln!(
                rows,
                "| {} | {} | {}{} |",
                comparison.item.emoji,
                comparison.item.label,
                count_label(comparison),
                comparison.item.unit
            );
        }

        rows
    }
}

impl Default for MarkdownCard {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer for MarkdownCard {
    fn render(&self, ctx: &CardContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::compute;
    use crate::core::catalog::find_region;

    #[test]
    fn test_markdown_card_layout() {
        let result = compute(300, 100, find_region("gangnam").unwrap()).unwrap();
        let ctx = CardContext::new(&result, "https://gangnam-apt.vercel.app");
        let md = MarkdownCard::new().render(&ctx).unwrap();

        assert!(md.starts_with("# 💀 지옥 레벨\n"));
        assert!(md.contains("> 월급 300만원 · 100% 저축 · 강남 아파트 (30억)"));
        assert!(md.contains("## 83년 4개월"));
        assert!(md.contains("| 🏠 | **제주도 아파트** | **10채** |"));
        assert!(md.contains("| ☕ | 스타벅스 아메리카노 | 66만잔 |"));
        assert!(md.contains("| 🍺 | 편의점 맥주 | 120만캔 |"));
        assert!(!md.contains("{{"));
    }
}
