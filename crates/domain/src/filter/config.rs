use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{CountRange, PriceRange};
use crate::error::{DomainError, DomainResult};
use crate::model::DatasetBounds;

/// Fully resolved filter constraints.
///
/// Build with [`FilterOptions::resolve`] or [`FilterConfig::unfiltered`];
/// the range fields always hold concrete bounds, so whether a range has
/// been narrowed is decided against the dataset's [`DatasetBounds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Substring to search for in complex names; empty means no
    /// constraint.
    pub name_query: String,
    /// Districts to keep; empty means no constraint, not "match
    /// nothing".
    pub districts: BTreeSet<String>,
    pub avg_price: PriceRange,
    pub price_per_pyeong: PriceRange,
    pub transactions: CountRange,
    pub only_with_transactions: bool,
}

impl FilterConfig {
    /// The configuration that matches every record: no query, no
    /// districts, every range at the dataset's full bounds.
    pub fn unfiltered(bounds: &DatasetBounds) -> Self {
        Self {
            name_query: String::new(),
            districts: BTreeSet::new(),
            avg_price: bounds.avg_price,
            price_per_pyeong: bounds.price_per_pyeong,
            transactions: bounds.transactions,
            only_with_transactions: false,
        }
    }
}

/// Partial constraints as supplied by the CLI or a scenario file.
///
/// Every field is optional; unset sides of a range fall back to the
/// dataset bounds when resolved, which leaves that side un-narrowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    pub name_query: Option<String>,
    pub districts: Vec<String>,
    pub min_avg_price: Option<f64>,
    pub max_avg_price: Option<f64>,
    pub min_pyeong_price: Option<f64>,
    pub max_pyeong_price: Option<f64>,
    pub min_transactions: Option<u32>,
    pub max_transactions: Option<u32>,
    pub only_with_transactions: bool,
}

impl FilterOptions {
    /// Resolve against the dataset's full bounds into a concrete
    /// [`FilterConfig`].
    pub fn resolve(&self, bounds: &DatasetBounds) -> DomainResult<FilterConfig> {
        let avg_price = resolve_price_range(
            "average price",
            self.min_avg_price,
            self.max_avg_price,
            bounds.avg_price,
        )?;
        let price_per_pyeong = resolve_price_range(
            "pyeong price",
            self.min_pyeong_price,
            self.max_pyeong_price,
            bounds.price_per_pyeong,
        )?;

        let transactions = CountRange::new(
            self.min_transactions.unwrap_or(bounds.transactions.min),
            self.max_transactions.unwrap_or(bounds.transactions.max),
        );
        if transactions.min > transactions.max {
            return Err(DomainError::InvertedRange {
                field: "transaction count",
                min: transactions.min.to_string(),
                max: transactions.max.to_string(),
            });
        }

        Ok(FilterConfig {
            name_query: self.name_query.clone().unwrap_or_default(),
            districts: self.districts.iter().cloned().collect(),
            avg_price,
            price_per_pyeong,
            transactions,
            only_with_transactions: self.only_with_transactions,
        })
    }
}

fn resolve_price_range(
    field: &'static str,
    min: Option<f64>,
    max: Option<f64>,
    full: PriceRange,
) -> DomainResult<PriceRange> {
    let range = PriceRange::new(min.unwrap_or(full.min), max.unwrap_or(full.max));
    if range.min > range.max {
        return Err(DomainError::InvertedRange {
            field,
            min: range.min.to_string(),
            max: range.max.to_string(),
        });
    }
    Ok(range)
}
