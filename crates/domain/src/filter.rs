pub mod config;
pub mod range;

pub use config::{FilterConfig, FilterOptions};
pub use range::{CountRange, PriceRange};
