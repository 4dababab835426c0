//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
///
/// Serialized as a bare JSON integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Parses any textual number that denotes a non-negative integer in range.
///
/// Accepts `"7"`, `" 7 "`, `"+7"`, `"7.0"`, `"7e0"` and unsigned radix
/// literals (`"0x7"`, `"0o7"`, `"0b111"`); rejects fractions, negatives, NaN
/// and infinities.
impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(radix_literal) = parse_radix_literal(trimmed) {
            return radix_literal.map(Self);
        }
        if let Ok(v) = trimmed.parse::<u32>() {
            return Ok(Self(v));
        }

        let number = trimmed
            .parse::<f64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;

        if !number.is_finite() || number.fract() != 0.0 {
            return Err(DomainError::invalid_id(format!(
                "ProductId: {s:?} is not an integer"
            )));
        }
        if number < 0.0 || number > f64::from(u32::MAX) {
            return Err(DomainError::invalid_id(format!(
                "ProductId: {s:?} is out of range"
            )));
        }

        // Range and integrality checked above.
        Ok(Self(number as u32))
    }
}

/// `None` when `s` carries no `0x`/`0o`/`0b` prefix.
fn parse_radix_literal(s: &str) -> Option<Result<u32, DomainError>> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    // from_str_radix tolerates a leading sign; radix literals carry none.
    if digits.starts_with(['+', '-']) {
        return Some(Err(DomainError::invalid_id(format!(
            "ProductId: {s:?} is not a radix literal"
        ))));
    }

    Some(
        u32::from_str_radix(digits, radix)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}"))),
    )
}
