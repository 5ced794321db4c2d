use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::logger::WarningSink;

/// Greedy decomposition of an integer into catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunks {
    pub values: Vec<u64>,
    pub labels: Vec<String>,
    /// Part of the number no catalog entry could absorb.
    pub remainder: u64,
}

impl Chunks {
    /// Labels joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.labels.join(" ")
    }
}

/// Greedy subtractive-aware chunking: largest value first, unlimited reuse.
///
/// This is not a minimum-label-count search. It yields canonical output
/// for numeral systems whose catalog already lists subtractive forms
/// (`IV`, `IX`, ...); for arbitrary catalogs use
/// [`get_combinations`](crate::get_combinations) instead.
///
/// Zero is emitted as the catalog's zero label (or `"0"` when there is
/// none) and never takes part in the greedy loop.
#[must_use]
pub fn to_chunks(number: u64, catalog: &Catalog) -> Chunks {
    let mut chunks = Chunks::default();
    if number == 0 {
        chunks.values.push(0);
        chunks
            .labels
            .push(catalog.zero_label().unwrap_or("0").to_owned());
    }

    let mut remaining = number;
    for entry in catalog.by_value_desc() {
        if entry.value == 0 {
            continue;
        }
        while remaining >= entry.value {
            chunks.values.push(entry.value);
            chunks.labels.push(entry.label.clone());
            remaining -= entry.value;
        }
    }
    chunks.remainder = remaining;
    chunks
}

/// How [`format_chunky`] matches catalog labels against free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkOrder {
    /// Strip labels as prefixes, most valuable first. Output follows the
    /// input order; suited to positional numerals and number words.
    #[default]
    ByValue,
    /// Remove labels wherever they occur, longest first. Output order is a
    /// permutation driven by the catalog; suited to formula tallies.
    ByLabelLength,
}

/// Splits loosely spaced or contiguous text into catalog tokens joined by `sep`.
///
/// Everything from the first `.` on is ignored (with a warning), since
/// fractional parts cannot be chunked unambiguously. Text that matches no
/// label is dropped silently.
pub fn format_chunky(
    text: &str,
    catalog: &Catalog,
    sep: &str,
    order: ChunkOrder,
    logger: &dyn WarningSink,
) -> String {
    let text = match text.split_once('.') {
        Some((head, _)) => {
            logger.warn("format_chunky ignores everything after dot");
            head
        }
        None => text,
    };

    let mut out = String::new();
    match order {
        ChunkOrder::ByValue => {
            let mut rest = text;
            for entry in catalog.by_value_desc() {
                while !rest.is_empty() {
                    let trimmed = rest.trim();
                    let Some(tail) = trimmed.strip_prefix(entry.label.as_str()) else {
                        break;
                    };
                    out.push_str(&entry.label);
                    out.push_str(sep);
                    rest = tail;
                }
            }
        }
        ChunkOrder::ByLabelLength => {
            let mut rest = text.to_owned();
            for entry in catalog.by_label_len_desc() {
                while !rest.is_empty() && rest.contains(entry.label.as_str()) {
                    out.push_str(&entry.label);
                    out.push_str(sep);
                    rest = rest.replacen(entry.label.as_str(), "", 1);
                }
            }
        }
    }
    out.trim_matches(|c| sep.contains(c)).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::{english_words, organic_atoms, roman};
    use crate::logger::{CollectingSink, SilentSink};

    #[test]
    fn greedy_roman_chunks() {
        let chunks = to_chunks(1999, &roman());
        assert_eq!(chunks.labels, vec!["M", "CM", "XC", "IX"]);
        assert_eq!(chunks.values, vec![1000, 900, 90, 9]);
        assert_eq!(chunks.text(), "M CM XC IX");
        assert_eq!(chunks.remainder, 0);
    }

    #[test]
    fn zero_uses_zero_label() {
        assert_eq!(to_chunks(0, &roman()).labels, vec!["zero"]);
        let no_zero = Catalog::new([("I", 1)]).unwrap();
        let chunks = to_chunks(0, &no_zero);
        assert_eq!(chunks.labels, vec!["0"]);
        assert_eq!(chunks.values, vec![0]);
    }

    #[test]
    fn remainder_is_reported() {
        let catalog = Catalog::new([("O", 16)]).unwrap();
        let chunks = to_chunks(35, &catalog);
        assert_eq!(chunks.labels, vec!["O", "O"]);
        assert_eq!(chunks.remainder, 3);
    }

    #[test]
    fn chunky_roman_prefixes() {
        let sink = SilentSink;
        assert_eq!(
            format_chunky("MMMCMXCVIII", &roman(), " ", ChunkOrder::ByValue, &sink),
            "M M M CM XC V I I I"
        );
        assert_eq!(
            format_chunky("M MMCMXCVI II", &roman(), ",", ChunkOrder::ByValue, &sink),
            "M,M,M,CM,XC,V,I,I,I"
        );
    }

    #[test]
    fn chunky_drops_unmatched_tail() {
        let out = format_chunky("XIIQQ", &roman(), " ", ChunkOrder::ByValue, &SilentSink);
        assert_eq!(out, "X I I");
    }

    #[test]
    fn chunky_words_with_spaces() {
        let out = format_chunky(
            "one hundred four",
            &english_words(),
            ",",
            ChunkOrder::ByValue,
            &SilentSink,
        );
        assert_eq!(out, "one hundred,four");
    }

    #[test]
    fn chunky_formula_by_label_length() {
        let out = format_chunky(
            "ClCC C H HH",
            &organic_atoms(),
            ",",
            ChunkOrder::ByLabelLength,
            &SilentSink,
        );
        assert_eq!(out, "Cl,H,H,H,C,C,C");
    }

    #[test]
    fn chunky_warns_and_stops_at_dot() {
        let sink = CollectingSink::new();
        let out = format_chunky("XV.III", &roman(), " ", ChunkOrder::ByValue, &sink);
        assert_eq!(out, "X V");
        assert_eq!(sink.messages().len(), 1);
    }
}
