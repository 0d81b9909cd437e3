pub mod complex;
pub mod dataset;

pub use complex::{Complex, PYEONG_PRICE_UNIT};
pub use dataset::{Dataset, DatasetBounds};
