//! Affordability calculator
//!
//! Given a monthly income (in 만원), a savings rate and a region, works out how
//! many months of saving it takes to reach the region's reference price and
//! what else that price would buy.

use crate::core::catalog::{ComparisonItem, Region, COMPARISONS};
use thiserror::Error;

/// KRW per unit of entered income (incomes are entered in 만원).
pub const INCOME_UNIT_SCALE: u64 = 10_000;

/// Lowest accepted savings rate, in percent.
pub const MIN_SAVINGS_RATE: u32 = 10;

/// Highest accepted savings rate, in percent.
pub const MAX_SAVINGS_RATE: u32 = 100;

/// Reasons a calculation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Income was zero after sanitizing.
    #[error("monthly income must be a positive whole number of 만원")]
    NonPositiveIncome,
    /// Savings rate outside `MIN_SAVINGS_RATE..=MAX_SAVINGS_RATE`.
    #[error("savings rate must be between 10% and 100%, got {0}%")]
    SavingsRateOutOfRange(u32),
    /// Monthly saving does not fit in a `u64`.
    #[error("monthly income {0}만원 is too large to calculate with")]
    IncomeTooLarge(u64),
}

/// How many units of one comparison item the region price buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// The item being compared against
    pub item: ComparisonItem,
    /// Whole units affordable (floor)
    pub count: u64,
}

/// Outcome of a single calculation. Replaced, never mutated, on recalculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    /// Income the result was computed from, in 만원
    pub monthly_income: u64,
    /// Savings rate the result was computed from, in percent
    pub savings_rate: u32,
    /// Amount saved every month, in KRW
    pub monthly_saving: u64,
    /// Months of saving until the price is reached (ceiling)
    pub months: u64,
    /// Region the result was computed for
    pub region: Region,
    /// One entry per comparison item, in catalog order
    pub comparisons: Vec<Comparison>,
}

impl CalculationResult {
    /// Whole years part of the duration.
    #[must_use]
    pub const fn years(&self) -> u64 {
        self.months / 12
    }
}

/// Strip everything but ASCII digits from user input and parse the rest.
///
/// Returns `None` when nothing numeric is left, the value is zero, or it
/// overflows. `"3,000만원"` yields `Some(3000)`.
#[must_use]
pub fn sanitize_income(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().ok().filter(|income| *income > 0)
}

/// Check a savings rate against the accepted range.
///
/// # Errors
/// Returns [`InvalidInput::SavingsRateOutOfRange`] outside 10..=100.
pub const fn validate_savings_rate(rate: u32) -> Result<u32, InvalidInput> {
    if rate < MIN_SAVINGS_RATE || rate > MAX_SAVINGS_RATE {
        Err(InvalidInput::SavingsRateOutOfRange(rate))
    } else {
        Ok(rate)
    }
}

/// KRW saved per month: `income × 10,000 × rate / 100`, computed exactly.
///
/// # Errors
/// Returns an [`InvalidInput`] for a zero income, an out-of-range rate, or overflow.
pub fn monthly_saving(monthly_income: u64, savings_rate: u32) -> Result<u64, InvalidInput> {
    if monthly_income == 0 {
        return Err(InvalidInput::NonPositiveIncome);
    }
    let rate = validate_savings_rate(savings_rate)?;
    monthly_income
        .checked_mul(INCOME_UNIT_SCALE / 100)
        .and_then(|scaled| scaled.checked_mul(u64::from(rate)))
        .ok_or(InvalidInput::IncomeTooLarge(monthly_income))
}

/// Run the affordability calculation.
///
/// # Errors
/// Returns an [`InvalidInput`] instead of a result when the income is zero,
/// the savings rate is outside 10..=100, or the monthly saving overflows.
pub fn compute(
    monthly_income: u64,
    savings_rate: u32,
    region: &Region,
) -> Result<CalculationResult, InvalidInput> {
    let saving = monthly_saving(monthly_income, savings_rate)?;
    let months = region.price.div_ceil(saving);

    let comparisons = COMPARISONS
        .iter()
        .map(|item| Comparison {
            item: *item,
            count: region.price / item.unit_price,
        })
        .collect();

    Ok(CalculationResult {
        monthly_income,
        savings_rate,
        monthly_saving: saving,
        months,
        region: *region,
        comparisons,
    })
}
