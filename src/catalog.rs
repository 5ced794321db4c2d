use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A single `(label, value)` pair of a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub label: String,
    pub value: u64,
}

/// Immutable mapping from labels to non-negative, pairwise distinct values.
///
/// Entries keep the order they were supplied in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, validating labels and values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] if a label is empty or repeated, a
    /// value is negative, or two labels share a value.
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        let mut labels = HashSet::new();
        let mut values = HashSet::new();
        for (label, value) in pairs {
            let label = label.into();
            if label.is_empty() {
                return Err(Error::invalid_catalog("labels must not be empty"));
            }
            let Ok(value) = u64::try_from(value) else {
                return Err(Error::invalid_catalog(format!(
                    "value for '{label}' must be >= 0, not {value}"
                )));
            };
            if !labels.insert(label.clone()) {
                return Err(Error::invalid_catalog(format!("label '{label}' is repeated")));
            }
            if !values.insert(value) {
                return Err(Error::invalid_catalog(format!(
                    "values not unique: {value} is used more than once"
                )));
            }
            entries.push(CatalogEntry { label, value });
        }
        Ok(Self { entries })
    }

    /// Parses a JSON object such as `{"H": 1, "O": 16}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] for malformed JSON or invalid entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON catalog from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] for malformed JSON or invalid entries.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened and
    /// [`Error::InvalidCatalog`] for malformed content.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|entry| entry.value)
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value)
    }

    /// Looks up the value of `label`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] if the label is not in the catalog.
    pub fn value_of(&self, label: &str) -> Result<u64> {
        self.get(label).ok_or_else(|| Error::UnknownLabel {
            label: label.to_owned(),
        })
    }

    #[must_use]
    pub fn label_of(&self, value: u64) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.label.as_str())
    }

    /// The label carrying the value zero, if any.
    #[must_use]
    pub fn zero_label(&self) -> Option<&str> {
        self.label_of(0)
    }

    /// Entries ordered from the largest value down.
    #[must_use]
    pub fn by_value_desc(&self) -> Vec<&CatalogEntry> {
        let mut sorted: Vec<&CatalogEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.value.cmp(&a.value));
        sorted
    }

    /// Entries ordered from the longest label down; ties keep catalog order.
    #[must_use]
    pub fn by_label_len_desc(&self) -> Vec<&CatalogEntry> {
        let mut sorted: Vec<&CatalogEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.label.chars().count().cmp(&a.label.chars().count()));
        sorted
    }

    /// Restricts the catalog to `keys`, skipping keys it does not contain.
    #[must_use]
    pub fn select<S: AsRef<str>>(&self, keys: &[S]) -> Self {
        let mut entries: Vec<CatalogEntry> = Vec::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref();
            if entries.iter().any(|entry| entry.label == key) {
                continue;
            }
            if let Some(entry) = self.entries.iter().find(|entry| entry.label == key) {
                entries.push(entry.clone());
            }
        }
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from labels to non-negative integers")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut pairs: Vec<(String, i64)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, i64>()? {
                    pairs.push((label, value));
                }
                Catalog::new(pairs).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
