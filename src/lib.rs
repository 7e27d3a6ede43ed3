pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::RosterConfig;
pub use core::tracker::GradeTracker;
pub use domain::model::{RecordState, Student, StudentEntry};
pub use utils::error::{Result, TrackerError};
