//! Leave dataset loading.
//!
//! This module provides the [`ConfigLoader`] type, which parses the leave
//! dataset compiled into the binary.

use crate::error::{LeaveError, LeaveResult};

use super::types::LeaveDataset;

/// Name the embedded dataset is reported under in errors.
pub const EMBEDDED_DATASET_NAME: &str = "config/leave_schedule.yaml";

const EMBEDDED_DATASET: &str = include_str!("../../config/leave_schedule.yaml");

/// Loads and provides access to the historical leave dataset.
///
/// # Example
///
/// ```
/// use leave_sim::config::ConfigLoader;
///
/// let loader = ConfigLoader::embedded()?;
/// assert_eq!(loader.dataset().leave.len(), 20);
/// # Ok::<(), leave_sim::error::LeaveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dataset: LeaveDataset,
}

impl ConfigLoader {
    /// Parses the dataset compiled into the crate.
    pub fn embedded() -> LeaveResult<Self> {
        Self::from_yaml_str(EMBEDDED_DATASET_NAME, EMBEDDED_DATASET)
    }

    /// Parses a dataset from YAML text.
    ///
    /// `source_name` is only used to label parse errors.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::DatasetParseError`] if the YAML is malformed or a
    /// required field is missing.
    pub fn from_yaml_str(source_name: &str, content: &str) -> LeaveResult<Self> {
        let dataset = serde_yaml::from_str::<LeaveDataset>(content).map_err(|e| {
            LeaveError::DatasetParseError {
                source_name: source_name.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { dataset })
    }

    /// Returns the parsed dataset.
    pub fn dataset(&self) -> &LeaveDataset {
        &self.dataset
    }
}
