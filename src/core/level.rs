//! Five-tier classification of how hopeless a saving duration is

use std::fmt;

/// A tier with its display payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// Position in the ordering, 0 (best) to 4 (worst)
    pub rank: u8,
    /// Badge emoji, also used in share text
    pub emoji: &'static str,
    /// Tier name
    pub label: &'static str,
    /// One-line commentary under the duration
    pub comment: &'static str,
    /// Accent color for rendered cards
    pub color: &'static str,
    /// Badge background for rendered cards
    pub background: &'static str,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.label)
    }
}

/// Tiers in order, each paired with the exclusive upper bound in years.
/// The last tier has no upper bound.
const LEVELS: [(Option<u64>, Level); 5] = [
    (
        Some(15),
        Level {
            rank: 0,
            emoji: "💪",
            label: "희망 레벨",
            comment: "열심히 하면 가능해요!",
            color: "#4ade80",
            background: "rgba(74,222,128,0.12)",
        },
    ),
    (
        Some(30),
        Level {
            rank: 1,
            emoji: "😤",
            label: "노력 레벨",
            comment: "열심히 사세요 ^^",
            color: "#fbbf24",
            background: "rgba(251,191,36,0.12)",
        },
    ),
    (
        Some(50),
        Level {
            rank: 2,
            emoji: "😢",
            label: "절망 레벨",
            comment: "지방이 살기 좋습니다 🏡",
            color: "#f97316",
            background: "rgba(249,115,22,0.12)",
        },
    ),
    (
        Some(80),
        Level {
            rank: 3,
            emoji: "😱",
            label: "공포 레벨",
            comment: "포기가 답입니다",
            color: "#ef4444",
            background: "rgba(239,68,68,0.12)",
        },
    ),
    (
        None,
        Level {
            rank: 4,
            emoji: "💀",
            label: "지옥 레벨",
            comment: "다음 생을 기약하세요 🙏",
            color: "#a855f7",
            background: "rgba(168,85,247,0.12)",
        },
    ),
];

/// Classify a duration in months.
///
/// Years are `months / 12` as a real number, so 179 months (14.9 years) is
/// still in the first tier and 180 months starts the second.
#[must_use]
pub fn classify_level(months: u64) -> Level {
    // years < bound  <=>  months < bound * 12
    LEVELS
        .iter()
        .find(|(bound, _)| bound.is_none_or(|years| months < years * 12))
        .map_or(LEVELS[LEVELS.len() - 1].1, |(_, level)| *level)
}

/// All tiers, best first.
pub fn all_levels() -> impl Iterator<Item = &'static Level> {
    LEVELS.iter().map(|(_, level)| level)
}
