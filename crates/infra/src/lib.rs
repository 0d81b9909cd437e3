pub mod error;
pub mod geojson;

pub use error::{InfraError, InfraResult};
pub use geojson::load_dataset;
