//! Console input parsing.
//!
//! Numeric parsing of user-entered text is this layer's responsibility; the
//! catalog re-checks the domain constraints on whatever comes through.

use std::io::{self, BufRead, Write};

use stockroom_core::{DomainError, DomainResult};

/// Print a prompt and read one line.
///
/// Returns `None` on end of input (the session treats that as "end session").
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a user-entered decimal price ("45", "45.5", "45.00") into cents.
///
/// At most two fraction digits; negatives are rejected here so they never
/// reach the catalog as a nonsense price.
pub fn parse_price_cents(text: &str) -> DomainResult<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DomainError::invalid_input("price cannot be empty"));
    }

    let (whole, fraction) = match text.split_once('.') {
        None => (text, ""),
        Some((whole, fraction)) => (whole, fraction),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(DomainError::invalid_input("price must contain digits"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(DomainError::invalid_input(format!(
            "'{text}' is not a valid price"
        )));
    }
    if fraction.len() > 2 {
        return Err(DomainError::invalid_input(
            "price has at most two decimal places",
        ));
    }

    let whole_cents: i64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<i64>()
            .ok()
            .and_then(|v| v.checked_mul(100))
            .ok_or_else(|| DomainError::invalid_input("price is too large"))?
    };

    let fraction_cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map(|v| v * 10).unwrap_or(0),
        _ => fraction.parse::<i64>().unwrap_or(0),
    };

    whole_cents
        .checked_add(fraction_cents)
        .ok_or_else(|| DomainError::invalid_input("price is too large"))
}

/// Parse a 1-based menu selection into an index into the rendered entries.
pub fn parse_menu_choice(text: &str, entry_count: usize) -> Option<usize> {
    let choice: usize = text.trim().parse().ok()?;
    if choice == 0 || choice > entry_count {
        return None;
    }
    Some(choice - 1)
}
