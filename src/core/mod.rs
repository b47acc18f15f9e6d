pub mod engine;
pub mod reporter;
pub mod scanner;

pub use crate::domain::model::{Issue, Record, ScanResult};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
