use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::chunk::to_chunks;
use crate::error::{Error, Result};
use crate::number::Number;

/// Separator placed between the integer and the fractional labels.
pub const FRACTION_MARK: &str = " . ";

/// Strategy used by [`num2label`] to turn a number into labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMethod {
    /// Greedy chunking of the truncated integer.
    #[default]
    Decimal,
    /// Each base-10 digit of the truncated integer chunked on its own.
    Digitwise,
    /// Greedy integer part, then the fractional digits digit-wise after `.`.
    /// The fraction is taken as an integer, so `3.05` encodes like `3.5`.
    #[value(name = "decimal_float")]
    DecimalFloat,
}

impl EncodingMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Digitwise => "digitwise",
            Self::DecimalFloat => "decimal_float",
        }
    }

    /// Encodes `number` with this strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for negative or non-finite
    /// numbers, for integers given to [`EncodingMethod::DecimalFloat`] and
    /// for floats whose decimal form has no plain fractional digits.
    pub fn encode(self, number: Number, catalog: &Catalog, sep: &str) -> Result<String> {
        match self {
            Self::Decimal => Ok(encode_decimal(number.truncated()?, catalog, sep)),
            Self::Digitwise => Ok(encode_digitwise(
                itoa::Buffer::new().format(number.truncated()?),
                catalog,
                sep,
            )),
            Self::DecimalFloat => encode_decimal_float(number, catalog, sep),
        }
    }
}

impl fmt::Display for EncodingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "decimal" => Ok(Self::Decimal),
            "digitwise" => Ok(Self::Digitwise),
            "decimal_float" => Ok(Self::DecimalFloat),
            other => Err(Error::UnknownMethod {
                method: other.to_owned(),
            }),
        }
    }
}

/// Converts a number into a label sequence.
///
/// # Errors
///
/// See [`EncodingMethod::encode`].
pub fn num2label(
    number: impl Into<Number>,
    catalog: &Catalog,
    sep: &str,
    method: EncodingMethod,
) -> Result<String> {
    method.encode(number.into(), catalog, sep)
}

fn encode_decimal(number: u64, catalog: &Catalog, sep: &str) -> String {
    to_chunks(number, catalog).labels.join(sep)
}

/// Chunks each ASCII digit of `digits` independently; the labels of one
/// digit are concatenated without separator.
fn encode_digitwise(digits: &str, catalog: &Catalog, sep: &str) -> String {
    digits
        .bytes()
        .map(|digit| to_chunks(u64::from(digit - b'0'), catalog).labels.concat())
        .collect::<Vec<_>>()
        .join(sep)
}

fn encode_decimal_float(number: Number, catalog: &Catalog, sep: &str) -> Result<String> {
    let Number::Float(_) = number else {
        return Err(Error::invalid_argument(format!(
            "decimal_float needs a float, not the integer {number}"
        )));
    };
    let integer = number.truncated()?;
    let fraction = number.fraction_digits().ok_or_else(|| {
        Error::invalid_argument(format!("{number} has no plain fractional digits"))
    })?;
    // The tail is read as an integer, so leading zeros do not survive.
    let trimmed = fraction.trim_start_matches('0');
    let fraction = if trimmed.is_empty() { "0" } else { trimmed };
    Ok(format!(
        "{}{FRACTION_MARK}{}",
        encode_decimal(integer, catalog, sep),
        encode_digitwise(fraction, catalog, sep)
    ))
}
