//! Configuration loading for the leave simulator.
//!
//! The historical leave dataset is YAML compiled into the crate; this module
//! parses it into typed structures and defines the simulation window.
//!
//! # Example
//!
//! ```
//! use leave_sim::config::ConfigLoader;
//!
//! let config = ConfigLoader::embedded().unwrap();
//! println!("Loaded dataset: {}", config.dataset().description);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, EMBEDDED_DATASET_NAME};
pub use types::{LeaveDataset, LeaveEntry, SimulationWindow};
