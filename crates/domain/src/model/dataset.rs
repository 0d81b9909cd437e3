use serde::{Deserialize, Serialize};

use crate::filter::{CountRange, FilterConfig, PriceRange};
use crate::model::Complex;
use crate::select;

/// Full observed ranges of the populated optional fields.
///
/// Computed once when the dataset is built and stored alongside it;
/// these are the values an un-narrowed filter defaults to. Price
/// bounds are floored/ceiled to whole filter-scale units so that the
/// integer bounds a user sees compare equal to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetBounds {
    pub avg_price: PriceRange,
    pub price_per_pyeong: PriceRange,
    pub transactions: CountRange,
}

impl DatasetBounds {
    pub fn from_complexes(complexes: &[Complex]) -> Self {
        let avg_price = PriceRange::spanning(complexes.iter().filter_map(|c| c.avg_price));
        let price_per_pyeong =
            PriceRange::spanning(complexes.iter().filter_map(Complex::pyeong_price));
        let max_transactions = complexes
            .iter()
            .map(Complex::transactions)
            .max()
            .unwrap_or(0);

        Self {
            avg_price,
            price_per_pyeong,
            transactions: CountRange::new(0, max_transactions),
        }
    }
}

/// A loaded record collection together with its filter defaults.
#[derive(Debug, Clone)]
pub struct Dataset {
    complexes: Vec<Complex>,
    bounds: DatasetBounds,
}

impl Dataset {
    pub fn new(complexes: Vec<Complex>) -> Self {
        let bounds = DatasetBounds::from_complexes(&complexes);
        Self { complexes, bounds }
    }

    pub fn complexes(&self) -> &[Complex] {
        &self.complexes
    }

    pub fn bounds(&self) -> &DatasetBounds {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.complexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.complexes.is_empty()
    }

    /// Records passing `filter`, in dataset order.
    pub fn select(&self, filter: &FilterConfig) -> Vec<&Complex> {
        select::select(&self.complexes, filter, &self.bounds)
    }
}
