//! Shared fixtures for the CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A small synthetic district dataset with hand-checked counts:
/// seven complexes across four districts, two of them without any
/// price data.
pub const FIXTURE_DATASET: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "geometry": null, "properties":
      {"dong": "서초동", "apt_nm": "서초래미안에스티지",
       "avg_price": 150000, "price_per_pyeong": 45000000, "transaction_count": 8}},
    {"type": "Feature", "geometry": null, "properties":
      {"dong": "서초동", "apt_nm": "서초푸른마을",
       "avg_price": 80000, "price_per_pyeong": 24000000, "transaction_count": 3}},
    {"type": "Feature", "geometry": null, "properties":
      {"dong": "서초동", "apt_nm": "서초옛집"}},
    {"type": "Feature", "geometry": null, "properties":
      {"dong": "방배동", "apt_nm": "방배래미안타워",
       "avg_price": 120000, "price_per_pyeong": 36000000, "transaction_count": 5}},
    {"type": "Feature", "geometry": null, "properties":
      {"dong": "방배동", "apt_nm": "방배소담"}},
    {"type": "Feature", "geometry": null, "properties":
      {"dong": "반포동", "apt_nm": "반포아크로리버",
       "avg_price": 300000, "price_per_pyeong": 90000000, "transaction_count": 27}},
    {"type": "Feature", "geometry": null, "properties":
      {"dong": "잠원동", "apt_nm": "잠원한신",
       "avg_price": 60000, "price_per_pyeong": 20000000, "transaction_count": 1}}
  ]
}"#;

pub fn write_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("apartments.geojson");
    fs::write(&path, FIXTURE_DATASET).expect("write dataset fixture");
    path
}

pub fn write_scenarios(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("scenarios.json");
    fs::write(&path, json).expect("write scenario fixture");
    path
}
