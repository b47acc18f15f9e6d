pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::LocalStorage;
pub use config::ObserverConfig;
pub use crate::core::engine::{ObserverEngine, RunSummary};
pub use crate::core::{reporter::Reporter, scanner::Scanner};
pub use domain::model::{Issue, Record, ScanResult};
pub use utils::error::{ObserverError, Result};
