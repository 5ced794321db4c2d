use crate::catalog::Catalog;
use crate::chunk::{ChunkOrder, format_chunky};
use crate::error::{Error, Result};
use crate::logger::WarningSink;
use crate::number::Number;

/// Sums the catalog values of the `sep`-separated tokens of `label`.
///
/// Tokens are not checked for order or repetition; only membership.
///
/// # Errors
///
/// Returns [`Error::UnknownLabel`] for a token absent from the catalog
/// (including the empty token produced by doubled separators) and
/// [`Error::InvalidArgument`] for an empty separator.
pub fn label2num(label: &str, catalog: &Catalog, sep: &str) -> Result<u64> {
    if sep.is_empty() {
        return Err(Error::invalid_argument("separator must not be empty"));
    }
    label.split(sep).try_fold(0_u64, |acc, token| {
        acc.checked_add(catalog.value_of(token)?)
            .ok_or(Error::Arithmetic {
                details: "label sum overflows u64".into(),
            })
    })
}

/// Decodes a label sequence that may carry a fractional tail after `.`.
///
/// Without a `.` this is [`label2num`]. With one, the part before it is
/// decoded as an integer and every whitespace-separated word after it is
/// re-chunked and weighted by `10^-position`. The sum is rounded to as
/// many decimals as there are fractional words; a tail without words
/// keeps the result an integer.
///
/// # Errors
///
/// Propagates [`label2num`] failures for either part.
pub fn label2num_fractional(
    label: &str,
    catalog: &Catalog,
    sep: &str,
    logger: &dyn WarningSink,
) -> Result<Number> {
    let mut parts = label.split('.');
    let integer_part = parts.next().unwrap_or_default();
    let Some(fraction_part) = parts.next() else {
        return label2num(label, catalog, sep).map(Number::from);
    };

    let integer = label2num(integer_part.trim(), catalog, sep)?;
    let words: Vec<&str> = fraction_part.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Number::from(integer));
    }

    #[allow(clippy::cast_precision_loss)]
    let mut result = integer as f64;
    let mut scale = 1.0_f64;
    for word in &words {
        scale *= 10.0;
        let chunked = format_chunky(word, catalog, sep, ChunkOrder::ByValue, logger);
        #[allow(clippy::cast_precision_loss)]
        let digit = label2num(&chunked, catalog, sep)? as f64;
        result += digit / scale;
    }
    Ok(Number::Float(result).round_to(words.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::{english_words, roman};
    use crate::logger::SilentSink;

    #[test]
    fn sums_token_values() {
        assert_eq!(label2num("M CM XC IX", &roman(), " ").unwrap(), 1999);
        assert_eq!(label2num("one hundred,four", &english_words(), ",").unwrap(), 104);
    }

    #[test]
    fn unknown_tokens_fail() {
        let err = label2num("M Q", &roman(), " ").unwrap_err();
        assert!(matches!(err, Error::UnknownLabel { label } if label == "Q"));
        let err = label2num("M  L", &roman(), " ").unwrap_err();
        assert!(matches!(err, Error::UnknownLabel { label } if label.is_empty()));
    }

    #[test]
    fn duplicate_and_unordered_tokens_are_accepted() {
        assert_eq!(label2num("I M I", &roman(), " ").unwrap(), 1002);
    }

    #[test]
    fn fractional_words_are_rechunked() {
        let value =
            label2num_fractional("V . VI VII VIII IX III", &roman(), " ", &SilentSink).unwrap();
        assert_eq!(value, Number::Float(5.67893));
        let value = label2num_fractional("I I I . zero V", &roman(), " ", &SilentSink).unwrap();
        assert_eq!(value, Number::Float(3.05));
    }

    #[test]
    fn fraction_without_words_stays_integer() {
        let value = label2num_fractional("V .", &roman(), " ", &SilentSink).unwrap();
        assert_eq!(value, Number::Int(5));
    }
}
