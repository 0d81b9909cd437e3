//! The filter predicate and the scan over a record collection.

use crate::filter::FilterConfig;
use crate::model::{Complex, DatasetBounds};

/// Whether a single record passes every active constraint.
///
/// `full` carries the dataset's default bounds: a price range that has
/// not been narrowed below its default keeps records lacking that
/// field visible, while any narrowing opts into priced records only.
pub fn matches(complex: &Complex, filter: &FilterConfig, full: &DatasetBounds) -> bool {
    if !filter.districts.is_empty() && !filter.districts.contains(&complex.dong) {
        return false;
    }

    if !filter.name_query.is_empty() && !complex.name.contains(&filter.name_query) {
        return false;
    }

    match complex.avg_price {
        Some(price) if !filter.avg_price.contains(price) => return false,
        None if filter.avg_price.narrows(&full.avg_price) => return false,
        _ => {}
    }

    match complex.pyeong_price() {
        Some(price) if !filter.price_per_pyeong.contains(price) => return false,
        None if filter.price_per_pyeong.narrows(&full.price_per_pyeong) => return false,
        _ => {}
    }

    // Counts have no absence exemption: a missing count is a zero.
    if !filter.transactions.contains(complex.transactions()) {
        return false;
    }

    if filter.only_with_transactions && !complex.has_transactions() {
        return false;
    }

    true
}

/// Stable filter over `complexes`: the result borrows from the input
/// and preserves its relative order.
pub fn select<'a>(
    complexes: &'a [Complex],
    filter: &FilterConfig,
    full: &DatasetBounds,
) -> Vec<&'a Complex> {
    complexes
        .iter()
        .filter(|complex| matches(complex, filter, full))
        .collect()
}
