//! Roman numerals on top of the generic label machinery.
//!
//! Numerals are handled in "spaced chunk" form (`M CM XC IX`), where every
//! token is an entry of [`catalogs::roman`]. [`format_nice_roman`] turns
//! that into the conventional contiguous notation (`M CM XC IX` stays,
//! `X X X` becomes `XXX`). Floats are written as the integer part, a `.`
//! token, and one chunk group per fractional digit.

use std::fmt;

use crate::catalogs;
use crate::chunk::{ChunkOrder, format_chunky};
use crate::decode::label2num_fractional;
use crate::encode::{EncodingMethod, num2label};
use crate::error::{Error, Result};
use crate::logger::WarningSink;
use crate::number::{Number, is_digits};
use crate::value::{DEFAULT_SEPARATOR, LabelledValue};

/// Smallest encodable number (written `zero`).
pub const MIN_VALUE: i64 = 0;
/// Largest encodable number (`MMMCMXCIX`).
pub const MAX_VALUE: i64 = 3999;

/// A parsed Roman numeral together with its decoded value.
#[derive(Debug, Clone, PartialEq)]
pub struct RomanNumeral {
    value: LabelledValue,
    label: String,
    nice_label: String,
    arab: Number,
}

impl RomanNumeral {
    /// Parses spaced or contiguous Roman text.
    ///
    /// Text without `.` is re-chunked first, so `MMXIV` and `M M X IV` are
    /// the same numeral. Text with `.` is kept as typed: after the dot,
    /// `III` means the digit 3 while `I I I` means `.111`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] if a token is not a Roman chunk.
    pub fn parse(text: &str, logger: &dyn WarningSink) -> Result<Self> {
        let catalog = catalogs::roman();
        let name = if text.contains('.') {
            text.to_owned()
        } else {
            format_chunky(text, &catalog, DEFAULT_SEPARATOR, ChunkOrder::ByValue, logger)
        };

        let (label, nice_label) = if name.contains('.') {
            let mut parts = name.split('.');
            let integer = parts.next().unwrap_or_default().trim();
            let fraction = parts.next().unwrap_or_default().trim();
            let integer =
                format_chunky(integer, &catalog, DEFAULT_SEPARATOR, ChunkOrder::ByValue, logger);
            (
                format!("{integer} . {fraction}"),
                format!("{} . {fraction}", format_nice_roman(&integer)),
            )
        } else {
            (name.clone(), format_nice_roman(&name))
        };

        let arab = roman2arab(&name, logger)?;
        Ok(Self {
            value: LabelledValue::spaced(name, catalog),
            label,
            nice_label,
            arab,
        })
    }

    /// Encodes `number` and parses the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside `0..=3999`.
    pub fn from_arab(number: impl Into<Number>, logger: &dyn WarningSink) -> Result<Self> {
        let spaced = arab2roman(number, logger)?;
        Self::parse(&spaced, logger)
    }

    /// The label sequence as stored (spaced chunks).
    #[must_use]
    pub fn name(&self) -> &str {
        self.value.name()
    }

    /// Spaced chunks with the integer part re-chunked.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Conventional contiguous notation.
    #[must_use]
    pub fn nice_label(&self) -> &str {
        &self.nice_label
    }

    #[must_use]
    pub const fn arab(&self) -> Number {
        self.arab
    }

    #[must_use]
    pub const fn as_labelled(&self) -> &LabelledValue {
        &self.value
    }

    /// Adds two numerals and re-encodes the sum.
    ///
    /// The sum is rounded to the larger decimal precision of the operands.
    /// Integer sums come back in nice notation; float sums come back as the
    /// spaced output of [`arab2roman`], which is not niceified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the sum exceeds [`MAX_VALUE`].
    pub fn add_to(&self, other: &Self, logger: &dyn WarningSink) -> Result<String> {
        let digits = self.arab.precision().max(other.arab.precision());
        let result = self.arab.plus(other.arab).round_to(digits);
        let spaced = arab2roman(result, logger)?;
        if result.is_float() {
            return Ok(spaced);
        }
        let catalog = catalogs::roman();
        let chunked =
            format_chunky(&spaced, &catalog, DEFAULT_SEPARATOR, ChunkOrder::ByValue, logger);
        Ok(format_nice_roman(&chunked))
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nice_label)
    }
}

/// Encodes a number in `0..=3999` as spaced Roman chunks.
///
/// Integers use greedy chunking (`1999` → `M CM XC IX`), floats the
/// decimal-float strategy (`5.67893` → `V . VI VII VIII IX III`). A zero
/// digit anywhere in the number is reported to `logger`; it has no effect
/// on the output.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] outside `0..=3999`.
pub fn arab2roman(number: impl Into<Number>, logger: &dyn WarningSink) -> Result<String> {
    let number = number.into();
    let in_range = match number {
        Number::Int(v) => (MIN_VALUE..=MAX_VALUE).contains(&v),
        #[allow(clippy::cast_precision_loss)]
        Number::Float(v) => (MIN_VALUE as f64..=MAX_VALUE as f64).contains(&v),
    };
    if !in_range {
        return Err(Error::OutOfRange {
            value: number.to_string(),
            min: MIN_VALUE,
            max: MAX_VALUE,
        });
    }

    if number.to_string().contains('0') {
        logger.warn(&format!("number {number} contains zero, replacement \"zero\""));
    }

    let method = if number.is_float() {
        EncodingMethod::DecimalFloat
    } else {
        EncodingMethod::Decimal
    };
    num2label(number, &catalogs::roman(), DEFAULT_SEPARATOR, method)
}

/// Decodes spaced Roman chunks, with an optional fractional tail.
///
/// After the `.` every word is one decimal digit and may be contiguous
/// (`VII` is 7). The result is rounded to the number of fractional words.
/// The `0..=3999` range is not enforced here.
///
/// # Errors
///
/// Returns [`Error::UnknownLabel`] if a token is not a Roman chunk.
pub fn roman2arab(label: &str, logger: &dyn WarningSink) -> Result<Number> {
    label2num_fractional(label, &catalogs::roman(), DEFAULT_SEPARATOR, logger)
}

/// Collapses runs of a repeated single-character token (`X X X` → `XXX`).
///
/// Multi-character tokens (`IV`, `CM`, `zero`) stay separate. Everything
/// after a `.` token is passed through untouched, since `. III` and
/// `. I I I` mean different fractions.
#[must_use]
pub fn format_nice_roman(spaced: &str) -> String {
    let mut out = String::new();
    let mut previous: Option<&str> = None;
    for token in spaced.split_whitespace() {
        if token.chars().count() == 1 && previous == Some(token) {
            out.push_str(token);
        } else {
            out.push(' ');
            out.push_str(token);
        }
        previous = Some(token);
        if token == "." {
            if let Some(tail) = spaced.split('.').nth(1) {
                out.push_str(tail);
            }
            break;
        }
    }
    out.trim().to_owned()
}

/// Replaces every number in whitespace-separated `text` by its Roman form.
///
/// Integer tokens get nice notation; tokens like `3.14` get the spaced
/// float encoding unchanged. Other tokens pass through. Tokens are
/// rejoined with single spaces.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] for numbers above [`MAX_VALUE`].
pub fn replace_all_arabs(text: &str, logger: &dyn WarningSink) -> Result<String> {
    let mut words: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        if is_digits(word) {
            let number: Number = word.parse().map_err(|_| Error::OutOfRange {
                value: word.to_owned(),
                min: MIN_VALUE,
                max: MAX_VALUE,
            })?;
            words.push(format_nice_roman(&arab2roman(number, logger)?));
        } else if let Some((integer, fraction)) = word.split_once('.')
            && is_digits(integer)
            && is_digits(fraction)
        {
            let number: Number = word.parse()?;
            words.push(arab2roman(number, logger)?);
        } else {
            words.push(word.to_owned());
        }
    }
    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{CollectingSink, SilentSink};

    #[test]
    fn nice_format_collapses_single_character_runs() {
        assert_eq!(format_nice_roman("M M M CM XC IX"), "MMM CM XC IX");
        assert_eq!(format_nice_roman("M MM L V I II"), "M MM L V I II");
        assert_eq!(format_nice_roman("X X X IV"), "XXX IV");
        assert_eq!(format_nice_roman("IV IV"), "IV IV");
    }

    #[test]
    fn nice_format_passes_fraction_through() {
        assert_eq!(format_nice_roman("I I I . I I I"), "III . I I I");
        assert_eq!(format_nice_roman("V . VI VII VIII IX III"), "V . VI VII VIII IX III");
    }

    #[test]
    fn zero_digit_warns() {
        let sink = CollectingSink::new();
        assert_eq!(arab2roman(1050_i64, &sink).unwrap(), "M L");
        assert_eq!(sink.messages().len(), 1);

        let sink = CollectingSink::new();
        arab2roman(1999_i64, &sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn range_is_enforced_on_encode_only() {
        assert!(matches!(
            arab2roman(4000_i64, &SilentSink),
            Err(Error::OutOfRange { max: 3999, .. })
        ));
        assert!(matches!(arab2roman(-1_i64, &SilentSink), Err(Error::OutOfRange { .. })));
        assert!(arab2roman(3999.5, &SilentSink).is_err());
        assert_eq!(roman2arab("M M M M", &SilentSink).unwrap(), Number::Int(4000));
    }

    #[test]
    fn parse_rechunks_contiguous_text() {
        let numeral = RomanNumeral::parse("MMCMXCIX", &SilentSink).unwrap();
        assert_eq!(numeral.name(), "M M CM XC IX");
        assert_eq!(numeral.nice_label(), "MM CM XC IX");
        assert_eq!(numeral.arab(), Number::Int(2999));
    }

    #[test]
    fn parse_keeps_fraction_as_typed() {
        let numeral = RomanNumeral::parse("I I I . III", &SilentSink).unwrap();
        assert_eq!(numeral.label(), "I I I . III");
        assert_eq!(numeral.nice_label(), "III . III");
        assert_eq!(numeral.arab(), Number::Float(3.3));
    }

    #[test]
    fn parse_rejects_unknown_chunks() {
        assert!(RomanNumeral::parse("V . Q", &SilentSink).is_err());
    }

    #[test]
    fn add_to_integer_and_float() {
        let a = RomanNumeral::parse("M L", &SilentSink).unwrap();
        let b = RomanNumeral::parse("M CM XC IX", &SilentSink).unwrap();
        assert_eq!(a.add_to(&b, &SilentSink).unwrap(), "MMM XL IX");

        let c = RomanNumeral::parse("I I I", &SilentSink).unwrap();
        let d = RomanNumeral::parse("V . VI VII VIII IX III", &SilentSink).unwrap();
        assert_eq!(c.add_to(&d, &SilentSink).unwrap(), "V I I I . VI VII VIII IX III");
    }

    #[test]
    fn replaces_numbers_in_text() {
        let out = replace_all_arabs("bla 34 bla 56 bla", &SilentSink).unwrap();
        assert_eq!(out, "bla XXX IV bla L V I bla");
        let out = replace_all_arabs("pi is 3.14", &SilentSink).unwrap();
        assert_eq!(out, "pi is I I I . I IV");
    }

    #[test]
    fn oversized_integer_tokens_are_out_of_range() {
        let err = replace_all_arabs("x 99999999999999999999 y", &SilentSink).unwrap_err();
        assert!(
            matches!(&err, Error::OutOfRange { value, .. } if value == "99999999999999999999"),
            "{err}"
        );
    }
}
