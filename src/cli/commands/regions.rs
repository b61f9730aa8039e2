//! Regions command handler

use gangnam_apt::core::catalog::{COMPARISONS, REGIONS};
use gangnam_apt::core::format::{group_digits, price_label};
use gangnam_apt::core::level::all_levels;

/// Print the region and comparison catalogs and the result tiers.
pub fn run() {
    println!("\n=== 지역 ===\n");
    for region in &REGIONS {
        println!(
            "  {:<12} {} {:<6} {:>6}  ({}원)",
            region.id,
            region.emoji,
            region.label,
            price_label(region.price),
            group_digits(region.price)
        );
    }

    println!("\n=== 비교 항목 ===\n");
    for item in &COMPARISONS {
        println!(
            "  {} {} · {}원/{}",
            item.emoji,
            item.label,
            group_digits(item.unit_price),
            item.unit
        );
    }

    println!("\n=== 레벨 ===\n");
    for level in all_levels() {
        println!("  {:<12} {}", level.to_string(), level.comment);
    }
}
