use serde::{Deserialize, Serialize};

/// KRW per one unit of the pyeong-price filter scale (만원).
pub const PYEONG_PRICE_UNIT: f64 = 10_000.0;

/// One apartment complex as loaded from the dataset.
///
/// Price and transaction fields are absent when the complex has no
/// recorded transactions; absence is structural, never a zero
/// sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    /// Administrative district (법정동) the complex belongs to.
    pub dong: String,
    /// Complex name, substring-searchable.
    pub name: String,
    /// Mean transaction price in ten-thousand KRW.
    pub avg_price: Option<f64>,
    /// Price per pyeong in KRW. A factor of [`PYEONG_PRICE_UNIT`]
    /// finer than the filter scale.
    pub price_per_pyeong: Option<f64>,
    pub transaction_count: Option<u32>,
}

impl Complex {
    /// Price per pyeong on the filter scale (ten-thousand KRW).
    #[inline]
    pub fn pyeong_price(&self) -> Option<f64> {
        self.price_per_pyeong.map(|krw| krw / PYEONG_PRICE_UNIT)
    }

    /// Transaction count with absence collapsed to zero.
    #[inline]
    pub fn transactions(&self) -> u32 {
        self.transaction_count.unwrap_or(0)
    }

    /// Whether at least one transaction is recorded. A present zero
    /// count is treated the same as an absent one.
    #[inline]
    pub fn has_transactions(&self) -> bool {
        matches!(self.transaction_count, Some(n) if n > 0)
    }
}
