//! Calculator core: catalogs, the affordability calculation, formatting,
//! tier classification, count-up animation, sharing, and result cards.

pub mod calculator;
pub mod card;
pub mod catalog;
pub mod count_up;
pub mod format;
pub mod level;
pub mod share;

pub use calculator::{compute, sanitize_income, CalculationResult, Comparison, InvalidInput};
pub use catalog::{find_region, ComparisonItem, Region, COMPARISONS, REGIONS};
pub use format::{format_duration, format_magnitude};
pub use level::{classify_level, Level};

/// Returns the current version of the `gangnam-apt` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
