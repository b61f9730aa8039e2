//! Integration tests for result card rendering and saving

use gangnam_apt::core::card::{
    export_file_name, renderer_for, CardContext, CardFormat, EXPORT_FILE_STEM,
};
use gangnam_apt::core::{compute, find_region, CalculationResult};
use std::fs;
use tempfile::TempDir;

const ORIGIN: &str = "https://gangnam-apt.vercel.app";

fn gangnam_result() -> CalculationResult {
    compute(300, 100, find_region("gangnam").unwrap()).unwrap()
}

#[test]
fn export_file_names_share_a_stem() {
    assert_eq!(export_file_name(CardFormat::Html), "강남아파트_계산결과.html");
    assert_eq!(export_file_name(CardFormat::Markdown), "강남아파트_계산결과.md");
    assert_eq!(export_file_name(CardFormat::Text), "강남아파트_계산결과.txt");
    assert!(export_file_name(CardFormat::default()).starts_with(EXPORT_FILE_STEM));
}

#[test]
fn context_describes_the_result() {
    let result = gangnam_result();
    let ctx = CardContext::new(&result, ORIGIN);

    assert_eq!(ctx.headline(), "월급 300만원 · 100% 저축 · 강남 아파트 (30억)");
    assert_eq!(ctx.duration(), "83년 4개월");
    assert_eq!(ctx.comparisons_title(), "30억으로 대신 살 수 있는 것들");
    assert_eq!(ctx.level.label, "지옥 레벨");
    assert_eq!(ctx.watermark, "gangnam-apt.vercel.app");
    assert_eq!(ctx.featured().len(), 2);
    assert_eq!(ctx.others().len(), 4);
}

#[test]
fn every_format_writes_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = gangnam_result();
    let ctx = CardContext::new(&result, ORIGIN);

    for format in [CardFormat::Html, CardFormat::Markdown, CardFormat::Text] {
        let path = temp_dir.path().join(export_file_name(format));
        renderer_for(format)
            .generate(&ctx, &path)
            .unwrap_or_else(|e| panic!("{format} card failed: {e}"));

        let content = fs::read_to_string(&path).expect("Failed to read card");
        assert!(content.contains("83년 4개월"), "{format} card lacks duration");
        assert!(content.contains("gangnam-apt.vercel.app"));
    }
}

#[test]
fn markdown_card_lists_comparisons() {
    let result = gangnam_result();
    let ctx = CardContext::new(&result, ORIGIN);
    let markdown = renderer_for(CardFormat::Markdown).render(&ctx).unwrap();

    assert!(markdown.starts_with("# 💀 지옥 레벨"));
    assert!(markdown.contains("| 🏠 | **제주도 아파트** | **10채** |"));
    assert!(markdown.contains("| 🚗 | **포르쉐 카이엔** | **20대** |"));
    assert!(markdown.contains("| ☕ | 스타벅스 아메리카노 | 66만잔 |"));
    assert!(markdown.contains("| 🍺 | 편의점 맥주 | 120만캔 |"));
    assert!(markdown.contains("| ✈️ | 유럽 왕복 비행기 | 1,500번 |"));
}

#[test]
fn generate_fails_for_missing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = gangnam_result();
    let ctx = CardContext::new(&result, ORIGIN);
    let path = temp_dir.path().join("missing").join("card.txt");

    assert!(renderer_for(CardFormat::Text).generate(&ctx, &path).is_err());
}
