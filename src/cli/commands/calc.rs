//! Calc command handler
//!
//! Prints the result card, the savings-rate hint, and the share link that
//! reproduces the calculation.

use crate::args::CalcArgs;
use gangnam_apt::config::Config;
use gangnam_apt::core::{
    card::formats::text::{progress_bar, PROGRESS_WIDTH},
    card::{CardContext, CardRenderer, TextCard},
    count_up::{CountUp, FRAME_INTERVAL},
    format::{format_duration, savings_rate_hint},
    share::share_link,
};
use logger::{error, verbose};
use std::io::{self, Write};
use std::thread;
use std::time::Instant;

/// Run the calc command.
pub fn run(input: &CalcArgs, animate: bool, config: &Config) {
    let Some(result) = super::calculate(input, config) else {
        return;
    };

    let hint = savings_rate_hint(result.savings_rate).unwrap_or_default();
    verbose!(
        "월 저축액 {}원 · 저축률 {}% {hint}",
        result.monthly_saving,
        result.savings_rate
    );

    if animate {
        animate_months(result.months);
    }

    let ctx = CardContext::new(&result, &config.share.origin);
    match TextCard::new().render(&ctx) {
        Ok(card) => print!("{card}"),
        Err(e) => {
            error!("Failed to render result card: {e}");
            eprintln!("✗ Failed to render result card: {e}");
            return;
        }
    }

    println!("저축률 {}% {hint}", result.savings_rate);
    match share_link(&config.share.origin, result.monthly_income) {
        Ok(link) => println!("🔗 {link}"),
        Err(e) => eprintln!("✗ {e}"),
    }
}

/// Count the duration up on one terminal line, one frame at a time.
///
/// The counter is owned by this function and dropped when it returns.
fn animate_months(months: u64) {
    let counter = CountUp::start(months);
    let mut stdout = io::stdout();

    loop {
        let now = Instant::now();
        let shown = counter.sample(now);
        let bar = progress_bar(counter.percent_of_target(shown), PROGRESS_WIDTH);
        let _ = write!(stdout, "\r  {:<16} {bar}", format_duration(shown));
        let _ = stdout.flush();

        if counter.is_finished(now) {
            break;
        }
        thread::sleep(FRAME_INTERVAL);
    }

    let _ = writeln!(stdout);
    let _ = writeln!(stdout);
}
