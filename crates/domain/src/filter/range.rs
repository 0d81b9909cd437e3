use serde::{Deserialize, Serialize};

/// Inclusive price range on the filter scale (ten-thousand KRW).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest whole-unit range covering every value yielded by
    /// `values`, or `[0, 0]` when there are none.
    pub fn spanning(values: impl IntoIterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for value in values {
            seen = true;
            min = min.min(value);
            max = max.max(value);
        }
        if !seen {
            return Self::new(0.0, 0.0);
        }
        Self::new(min.floor(), max.ceil())
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether this range cuts into `full` on either side. An equal or
    /// wider range does not narrow.
    #[inline]
    pub fn narrows(&self, full: &Self) -> bool {
        self.min > full.min || self.max < full.max
    }
}

/// Inclusive transaction-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}
