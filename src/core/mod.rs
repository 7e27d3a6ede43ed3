pub mod tracker;

pub use crate::domain::model::{RecordState, Student, StudentEntry};
pub use crate::domain::ports::RosterProvider;
pub use crate::utils::error::Result;
