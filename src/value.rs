use std::fmt;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::combinations::get_combinations;
use crate::error::{Error, Result};

pub const DEFAULT_SEPARATOR: &str = " ";

/// A label sequence such as `"H H O"` interpreted through a [`Catalog`].
///
/// Tokens are only checked against the catalog when a derived value is
/// requested, so construction never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledValue {
    name: String,
    catalog: Arc<Catalog>,
    sep: String,
}

impl LabelledValue {
    #[must_use]
    pub fn new(name: impl Into<String>, catalog: Arc<Catalog>, sep: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog,
            sep: sep.into(),
        }
    }

    /// Shorthand for a space-separated label sequence.
    #[must_use]
    pub fn spaced(name: impl Into<String>, catalog: Arc<Catalog>) -> Self {
        Self::new(name, catalog, DEFAULT_SEPARATOR)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.sep
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.name.split(self.sep.as_str())
    }

    /// Catalog value of every token, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] for the first token missing from the catalog.
    pub fn values(&self) -> Result<Vec<u64>> {
        self.tokens()
            .map(|token| self.catalog.value_of(token))
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] for the first token missing from the
    /// catalog and [`Error::Arithmetic`] if the sum overflows `u64`.
    pub fn sum_values(&self) -> Result<u64> {
        checked_total(&self.values()?, &self.name)
    }

    /// Arithmetic mean of the token values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] for the first token missing from the
    /// catalog and [`Error::Arithmetic`] if the sum overflows `u64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Result<f64> {
        let values = self.values()?;
        let total = checked_total(&values, &self.name)?;
        Ok(total as f64 / values.len() as f64)
    }

    /// Counts per label in first-occurrence order: `"H H O"` gives `"H2O"`.
    #[must_use]
    pub fn condensed_name(&self) -> String {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for token in self.tokens() {
            match counts.iter_mut().find(|(label, _)| *label == token) {
                Some((_, count)) => *count += 1,
                None => counts.push((token, 1)),
            }
        }
        let mut condensed = String::new();
        for (label, count) in counts {
            condensed.push_str(label);
            if count > 1 {
                condensed.push_str(itoa::Buffer::new().format(count));
            }
        }
        condensed
    }

    /// Concatenates both token lists into a new value on this catalog.
    ///
    /// With `sort`, the combined tokens are ordered by ascending catalog value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] when sorting meets a token missing
    /// from this catalog.
    pub fn append(&self, other: &Self, sort: bool) -> Result<Self> {
        let mut tokens: Vec<&str> = self.tokens().chain(other.tokens()).collect();
        if sort {
            let mut keyed = tokens
                .into_iter()
                .map(|token| Ok((self.catalog.value_of(token)?, token)))
                .collect::<Result<Vec<(u64, &str)>>>()?;
            keyed.sort_by_key(|(value, _)| *value);
            tokens = keyed.into_iter().map(|(_, token)| token).collect();
        }
        Ok(Self::new(
            tokens.join(self.sep.as_str()),
            Arc::clone(&self.catalog),
            self.sep.clone(),
        ))
    }

    /// `self + other` on the summed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] if either side has an unknown token
    /// and [`Error::Arithmetic`] if the sum overflows `u64`.
    pub fn sum_with(&self, other: &Self) -> Result<u64> {
        self.sum_values()?
            .checked_add(other.sum_values()?)
            .ok_or_else(|| Error::Arithmetic {
                details: format!("{} + {} overflows u64", self.name, other.name).into(),
            })
    }

    /// `self - other` on the summed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] if either side has an unknown token.
    pub fn difference(&self, other: &Self) -> Result<i128> {
        Ok(i128::from(self.sum_values()?) - i128::from(other.sum_values()?))
    }

    /// `self * other` on the summed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLabel`] if either side has an unknown token.
    pub fn product(&self, other: &Self) -> Result<u128> {
        Ok(u128::from(self.sum_values()?) * u128::from(other.sum_values()?))
    }

    /// `self / other` on the summed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] if `other` sums to zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn quotient(&self, other: &Self) -> Result<f64> {
        let (lhs, rhs) = self.operands(other)?;
        Ok(lhs as f64 / rhs as f64)
    }

    /// `self // other` on the summed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] if `other` sums to zero.
    pub fn floor_quotient(&self, other: &Self) -> Result<u64> {
        let (lhs, rhs) = self.operands(other)?;
        Ok(lhs / rhs)
    }

    /// `self % other` on the summed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arithmetic`] if `other` sums to zero.
    pub fn remainder(&self, other: &Self) -> Result<u64> {
        let (lhs, rhs) = self.operands(other)?;
        Ok(lhs % rhs)
    }

    fn operands(&self, other: &Self) -> Result<(u64, u64)> {
        let lhs = self.sum_values()?;
        let rhs = other.sum_values()?;
        if rhs == 0 {
            return Err(Error::Arithmetic {
                details: format!("division of {} by zero-valued {}", self.name, other.name).into(),
            });
        }
        Ok((lhs, rhs))
    }
}

fn checked_total(values: &[u64], name: &str) -> Result<u64> {
    values
        .iter()
        .try_fold(0_u64, |acc, value| acc.checked_add(*value))
        .ok_or_else(|| Error::Arithmetic {
            details: format!("sum of '{name}' overflows u64").into(),
        })
}

impl fmt::Display for LabelledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Every way to reach `target` with catalog values, as labelled values.
///
/// This answers "all molecules of mass N" for an element catalog.
#[must_use]
pub fn labelled_combinations(
    target: u64,
    catalog: &Arc<Catalog>,
    selected_keys: Option<&[&str]>,
) -> Vec<LabelledValue> {
    get_combinations(target, catalog, selected_keys)
        .into_iter()
        .map(|combination| {
            let labels: Vec<&str> = combination
                .iter()
                .filter_map(|value| catalog.label_of(*value))
                .collect();
            LabelledValue::spaced(labels.join(DEFAULT_SEPARATOR), Arc::clone(catalog))
        })
        .collect()
}
