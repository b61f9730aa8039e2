//! Region and comparison-item catalogs
//!
//! Both tables are compile-time constants. Prices are whole KRW.

use std::fmt;

/// A region with its reference apartment price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Stable ASCII identifier used on the command line and in config
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Badge shown next to the label
    pub emoji: &'static str,
    /// Reference purchase price in KRW
    pub price: u64,
}

impl Region {
    /// Whether `query` names this region, by identifier (ASCII case-insensitive) or label.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.id.eq_ignore_ascii_case(query) || self.label == query
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.label)
    }
}

/// Something the apartment price could buy instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonItem {
    /// Icon shown on the card
    pub emoji: &'static str,
    /// Display label
    pub label: &'static str,
    /// Price of a single unit in KRW
    pub unit_price: u64,
    /// Counter word appended to the count (채, 대, 잔, ...)
    pub unit: &'static str,
}

/// Supported regions. The first entry is the default.
pub const REGIONS: [Region; 6] = [
    Region {
        id: "gangnam",
        label: "강남",
        emoji: "👑",
        price: 3_000_000_000,
    },
    Region {
        id: "seocho",
        label: "서초",
        emoji: "🎓",
        price: 2_500_000_000,
    },
    Region {
        id: "mayongseong",
        label: "마용성",
        emoji: "🏙️",
        price: 1_500_000_000,
    },
    Region {
        id: "songpa",
        label: "송파",
        emoji: "🏢",
        price: 1_800_000_000,
    },
    Region {
        id: "pangyo",
        label: "판교",
        emoji: "💼",
        price: 800_000_000,
    },
    Region {
        id: "local",
        label: "지방",
        emoji: "🏡",
        price: 300_000_000,
    },
];

/// Comparison items, in card order. The first two are shown as large tiles.
pub const COMPARISONS: [ComparisonItem; 6] = [
    ComparisonItem {
        emoji: "🏠",
        label: "제주도 아파트",
        unit_price: 300_000_000,
        unit: "채",
    },
    ComparisonItem {
        emoji: "🚗",
        label: "포르쉐 카이엔",
        unit_price: 150_000_000,
        unit: "대",
    },
    ComparisonItem {
        emoji: "📱",
        label: "아이폰 16 Pro",
        unit_price: 1_800_000,
        unit: "대",
    },
    ComparisonItem {
        emoji: "☕",
        label: "스타벅스 아메리카노",
        unit_price: 4_500,
        unit: "잔",
    },
    ComparisonItem {
        emoji: "🍺",
        label: "편의점 맥주",
        unit_price: 2_500,
        unit: "캔",
    },
    ComparisonItem {
        emoji: "✈️",
        label: "유럽 왕복 비행기",
        unit_price: 2_000_000,
        unit: "번",
    },
];

/// The region selected when nothing else is configured (강남).
#[must_use]
pub const fn default_region() -> &'static Region {
    &REGIONS[0]
}

/// Look up a region by identifier or label.
#[must_use]
pub fn find_region(query: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.matches(query))
}

/// Identifiers of every region, for error messages and help text.
#[must_use]
pub fn region_ids() -> Vec<&'static str> {
    REGIONS.iter().map(|region| region.id).collect()
}
