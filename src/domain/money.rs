use thiserror::Error;

/// Amounts are stored as signed integer cents so that sums stay exact.
/// $1000.00 = 100_000 cents.
pub type Cents = i64;

/// Render an amount as a plain decimal string.
/// Example: 5000 -> "50.00", -1 -> "-0.01"
pub fn format_amount(amount: Cents) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.abs() / 100, amount.abs() % 100)
}

/// Parse user-entered text into cents.
///
/// Accepts whole units ("50"), up to two decimal digits ("12.5", "12.34"),
/// and a leading minus. Digits past the second decimal place are truncated,
/// matching the precision amounts are displayed with. Entry forms discard
/// the action entirely when parsing fails, so the store only ever sees
/// well-formed amounts.
pub fn parse_amount(input: &str) -> Result<Cents, ParseAmountError> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if digits.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let (unit_part, decimal_part) = match digits.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (digits, ""),
    };

    if !decimal_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseAmountError::Malformed);
    }

    let units: i64 = if unit_part.is_empty() {
        0
    } else {
        unit_part.parse().map_err(|_| ParseAmountError::Malformed)?
    };

    let decimals = &decimal_part[..decimal_part.len().min(2)];
    let cents: i64 = match decimals.len() {
        0 => 0,
        // A single digit is tenths: "12.5" is 12.50
        1 => decimals.parse::<i64>().map_err(|_| ParseAmountError::Malformed)? * 10,
        _ => decimals.parse().map_err(|_| ParseAmountError::Malformed)?,
    };

    let amount = units * 100 + cents;
    Ok(if negative { -amount } else { amount })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount is not a valid decimal number")]
    Malformed,
}
