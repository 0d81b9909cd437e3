//! GeoJSON dataset loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use apt_filter_domain::model::{Complex, Dataset};
use serde::Deserialize;
use tracing::debug;

use crate::error::{InfraError, InfraResult};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: Properties,
}

/// Property bag of one feature. Geometry is irrelevant to filtering
/// and is skipped entirely.
#[derive(Debug, Deserialize)]
struct Properties {
    dong: String,
    apt_nm: String,
    #[serde(default)]
    avg_price: Option<f64>,
    #[serde(default)]
    price_per_pyeong: Option<f64>,
    #[serde(default)]
    transaction_count: Option<u32>,
}

impl From<Properties> for Complex {
    fn from(props: Properties) -> Self {
        Self {
            dong: props.dong,
            name: props.apt_nm,
            avg_price: props.avg_price,
            price_per_pyeong: props.price_per_pyeong,
            transaction_count: props.transaction_count,
        }
    }
}

/// Load a GeoJSON `FeatureCollection` into a [`Dataset`], computing
/// the filter bounds over the populated values.
pub fn load_dataset(path: &Path) -> InfraResult<Dataset> {
    let file = File::open(path).map_err(|source| InfraError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;
    let collection: FeatureCollection = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| InfraError::DatasetParse {
            path: path.to_path_buf(),
            source,
        },
    )?;

    let complexes: Vec<Complex> = collection
        .features
        .into_iter()
        .map(|feature| feature.properties.into())
        .collect();
    let dataset = Dataset::new(complexes);
    debug!(
        records = dataset.len(),
        avg_price_min = dataset.bounds().avg_price.min,
        avg_price_max = dataset.bounds().avg_price.max,
        "dataset loaded"
    );
    Ok(dataset)
}
