use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A number that is either an exact integer or a binary float.
///
/// The distinction matters: floats are encoded with a fractional tail and
/// integers are not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Drops the fractional part, rejecting values the chunker cannot take.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for non-finite or negative values
    /// and for floats beyond `u64::MAX`.
    pub fn truncated(self) -> Result<u64> {
        match self {
            Self::Int(v) => u64::try_from(v)
                .map_err(|_| Error::invalid_argument(format!("number must be >= 0, not {v}"))),
            Self::Float(v) => truncate_to_u64(v).ok_or_else(|| {
                Error::invalid_argument(format!("number must be a finite value >= 0, not {self}"))
            }),
        }
    }

    /// Digits after the decimal point of the shortest decimal form.
    ///
    /// `None` for integers and for floats printed in exponent notation.
    #[must_use]
    pub fn fraction_digits(self) -> Option<String> {
        let Self::Float(_) = self else {
            return None;
        };
        let text = self.to_string();
        let (_, fraction) = text.split_once('.')?;
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(fraction.to_owned())
    }

    /// Number of decimal places in the shortest decimal form (zero for integers).
    #[must_use]
    pub fn precision(self) -> usize {
        self.fraction_digits().map_or(0, |digits| digits.len())
    }

    /// Rounds to `digits` decimal places; integers are returned unchanged.
    #[must_use]
    pub fn round_to(self, digits: usize) -> Self {
        match self {
            Self::Int(_) => self,
            Self::Float(v) if !v.is_finite() => self,
            Self::Float(v) => format!("{v:.digits$}")
                .parse::<f64>()
                .map_or(self, Self::Float),
        }
    }

    /// Adds two numbers; integer sums stay integers unless they overflow.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Self::Float(self.as_f64() + other.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() + other.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Number {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => f.write_str(itoa::Buffer::new().format(*v)),
            Self::Float(v) => f.write_str(ryu::Buffer::new().format(*v)),
        }
    }
}

impl FromStr for Number {
    type Err = Error;

    /// Accepts `[-]digits` as an integer and `[-]digits.digits` as a float.
    fn from_str(s: &str) -> Result<Self> {
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let invalid = || Error::invalid_argument(format!("'{s}' is not a decimal number"));
        match unsigned.split_once('.') {
            None if is_digits(unsigned) => s.parse::<i64>().map(Self::Int).map_err(|_| invalid()),
            Some((int, fraction)) if is_digits(int) && is_digits(fraction) => {
                s.parse::<f64>().map(Self::Float).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `2^64`, the smallest float above `u64::MAX`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_to_u64(value: f64) -> Option<u64> {
    let truncated = value.trunc();
    (0.0..U64_LIMIT)
        .contains(&truncated)
        .then_some(truncated as u64)
}
