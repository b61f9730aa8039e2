//! CLI command handlers for `gangnamapt`.
//!
//! Each command is implemented in its own submodule. Commands that run a
//! calculation share [`calculate`] for resolving their inputs.

pub mod calc;
pub mod config;
pub mod export;
pub mod regions;
pub mod share;

use crate::args::CalcArgs;
use gangnam_apt::config::Config;
use gangnam_apt::core::{
    calculator::{compute, sanitize_income, CalculationResult},
    catalog::{find_region, region_ids, Region},
    share::salary_from_link,
};
use logger::{debug, info, warn};

/// Rate used when neither the command line nor the config sets one
const FALLBACK_SAVINGS_RATE: u32 = 100;

/// Resolve the region argument, falling back to the configured region.
fn resolve_region(args: &CalcArgs, config: &Config) -> Option<&'static Region> {
    match &args.region {
        Some(query) => {
            let region = find_region(query);
            if region.is_none() {
                eprintln!(
                    "✗ Unknown region '{query}'. Choose one of: {}",
                    region_ids().join(", ")
                );
            }
            region
        }
        None => Some(config.region()),
    }
}

/// Resolve the income: the INCOME argument first, then `--from-link`.
fn resolve_income(args: &CalcArgs) -> Option<u64> {
    if let Some(raw) = &args.income {
        return sanitize_income(raw);
    }
    let link = args.from_link.as_deref()?;
    let salary = salary_from_link(link);
    if salary.is_none() {
        warn!("Ignoring share link without a usable salary: {link}");
    }
    salary
}

/// Run the calculation for a command's inputs.
///
/// Invalid input is not an error: a notice is printed and `None` returned,
/// leaving nothing calculated.
pub fn calculate(args: &CalcArgs, config: &Config) -> Option<CalculationResult> {
    let region = resolve_region(args, config)?;

    let Some(income) = resolve_income(args) else {
        eprintln!("✗ 월 세후 급여를 만원 단위 숫자로 입력해주세요 (예: 300)");
        return None;
    };

    let rate = args.savings_rate.unwrap_or(match config.calculator.savings_rate {
        0 => FALLBACK_SAVINGS_RATE,
        rate => rate,
    });

    debug!(
        "Calculating: income={income}만원 rate={rate}% region={}",
        region.id
    );

    match compute(income, rate, region) {
        Ok(result) => {
            info!(
                "{} at {}% of {}만원: {} months",
                region.id, rate, income, result.months
            );
            Some(result)
        }
        Err(e) => {
            eprintln!("✗ {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_toml(
            r#"
[calculator]
region = "pangyo"
savings_rate = 50
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_calculate_uses_config_defaults() {
        let args = CalcArgs {
            income: Some("500".to_string()),
            ..CalcArgs::default()
        };
        let result = calculate(&args, &config()).unwrap();
        assert_eq!(result.region.id, "pangyo");
        assert_eq!(result.savings_rate, 50);
        assert_eq!(result.months, 320);
    }

    #[test]
    fn test_arguments_override_config() {
        let args = CalcArgs {
            income: Some("300".to_string()),
            region: Some("강남".to_string()),
            savings_rate: Some(100),
            from_link: None,
        };
        assert_eq!(calculate(&args, &config()).unwrap().months, 1000);
    }

    #[test]
    fn test_income_from_link() {
        let args = CalcArgs {
            from_link: Some("https://gangnam-apt.vercel.app/?s=500".to_string()),
            ..CalcArgs::default()
        };
        assert_eq!(calculate(&args, &config()).unwrap().monthly_income, 500);
    }

    #[test]
    fn test_invalid_inputs_produce_nothing() {
        let no_income = CalcArgs::default();
        assert!(calculate(&no_income, &config()).is_none());

        let zero = CalcArgs {
            income: Some("0".to_string()),
            ..CalcArgs::default()
        };
        assert!(calculate(&zero, &config()).is_none());

        let bad_rate = CalcArgs {
            income: Some("300".to_string()),
            savings_rate: Some(5),
            ..CalcArgs::default()
        };
        assert!(calculate(&bad_rate, &config()).is_none());

        let bad_region = CalcArgs {
            income: Some("300".to_string()),
            region: Some("busan".to_string()),
            ..CalcArgs::default()
        };
        assert!(calculate(&bad_region, &config()).is_none());
    }
}
