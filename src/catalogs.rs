//! Built-in catalogs for the numeral systems shipped with the crate.

use std::sync::{Arc, LazyLock};

use crate::catalog::Catalog;

const ROMAN: [(&str, i64); 14] = [
    ("zero", 0),
    ("I", 1),
    ("IV", 4),
    ("V", 5),
    ("IX", 9),
    ("X", 10),
    ("XL", 40),
    ("L", 50),
    ("XC", 90),
    ("C", 100),
    ("CD", 400),
    ("D", 500),
    ("CM", 900),
    ("M", 1000),
];

const ORGANIC_ATOMS: [(&str, i64); 10] = [
    ("H", 1),
    ("C", 12),
    ("N", 14),
    ("O", 16),
    ("F", 19),
    ("P", 31),
    ("S", 32),
    ("Cl", 35),
    ("Br", 80),
    ("I", 127),
];

const ENGLISH_WORDS: [(&str, i64); 38] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("one hundred", 100),
    ("two hundred", 200),
    ("three hundred", 300),
    ("four hundred", 400),
    ("five hundred", 500),
    ("six hundred", 600),
    ("seven hundred", 700),
    ("eight hundred", 800),
    ("nine hundred", 900),
    ("one thousand", 1000),
];

static ROMAN_CATALOG: LazyLock<Arc<Catalog>> = LazyLock::new(|| preset(&ROMAN));

/// Roman numeral chunks including the subtractive forms (`IV`, `CM`, ...)
/// and a `zero` label.
#[must_use]
pub fn roman() -> Arc<Catalog> {
    Arc::clone(&ROMAN_CATALOG)
}

/// Nominal atomic masses of common organic elements.
#[must_use]
pub fn organic_atoms() -> Arc<Catalog> {
    preset(&ORGANIC_ATOMS)
}

/// English number words. Hundreds carry their multiplier ("one hundred"),
/// so labels contain spaces and need a different separator.
#[must_use]
pub fn english_words() -> Arc<Catalog> {
    preset(&ENGLISH_WORDS)
}

fn preset(pairs: &[(&str, i64)]) -> Arc<Catalog> {
    let catalog = Catalog::new(pairs.iter().copied());
    // Presets are constants with unique, non-negative values.
    Arc::new(catalog.unwrap_or_else(|err| unreachable!("preset catalog is invalid: {err}")))
}
