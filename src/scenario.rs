//! Scenario files: named filter configurations with expected match
//! counts, run as a verification suite against a dataset.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use apt_filter_domain::filter::FilterOptions;
use apt_filter_domain::model::Dataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One named expectation: a filter and the count it should match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub filter: FilterOptions,
    pub expected: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSuite {
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSuite {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to read scenario file '{}'", path.display()))?;
        let suite: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse scenario file '{}'", path.display()))?;
        Ok(suite)
    }
}

/// Result of one scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: String,
    pub expected: usize,
    pub actual: usize,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.actual == self.expected
    }

    /// Signed actual-minus-expected difference, capped at the i64
    /// limits instead of wrapping.
    pub fn diff(&self) -> i64 {
        if self.actual >= self.expected {
            to_i64(self.actual - self.expected)
        } else {
            -to_i64(self.expected - self.actual)
        }
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Run every scenario against `dataset`, collecting outcomes.
///
/// A count mismatch is an outcome, not an error; only a filter that
/// cannot be resolved (inverted range) aborts the run.
pub fn run_suite(suite: &ScenarioSuite, dataset: &Dataset) -> Result<Vec<Outcome>> {
    suite
        .scenarios
        .iter()
        .map(|scenario| {
            let filter = scenario
                .filter
                .resolve(dataset.bounds())
                .with_context(|| format!("scenario '{}' has an invalid filter", scenario.name))?;
            let actual = dataset.select(&filter).len();
            debug!(
                scenario = %scenario.name,
                expected = scenario.expected,
                actual,
                "scenario evaluated"
            );
            Ok(Outcome {
                name: scenario.name.clone(),
                expected: scenario.expected,
                actual,
            })
        })
        .collect()
}
