//! Money rules: the transport pattern for amounts and the decimal helpers
//! built on top of it.
//!
//! Amounts travel as strings so no binary floating point is involved between
//! the input box and the server.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Non-negative number with at most two fractional digits, ASCII digits only.
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("amount pattern is a valid regex")
});

/// Share of the received amount that goes to the fund (10%).
fn fund_share() -> Decimal {
    Decimal::new(1, 1)
}

/// Whether `input` is an amount the income schema accepts.
pub fn is_valid_amount(input: &str) -> bool {
    AMOUNT_PATTERN.is_match(input)
}

/// Parse anything that reads as a decimal number, signed or not.
///
/// Returns `None` for blank input.
pub fn parse_number(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// 10% of `amount`, rounded to cents and rendered without trailing zeros.
///
/// `None` when the amount is blank, not a number, zero or negative.
pub fn fund_amount_for(amount: &str) -> Option<String> {
    let amount = parse_number(amount)?;
    if amount <= Decimal::ZERO {
        return None;
    }
    let share = (amount * fund_share())
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    Some(share.to_string())
}

/// Display form of an amount: two decimals with thousands separators.
///
/// Input that does not parse is returned as-is.
pub fn format_amount(amount: &str) -> String {
    let Some(value) = parse_number(amount) else {
        return amount.to_string();
    };

    let fixed = format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    );
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, cents)
}
