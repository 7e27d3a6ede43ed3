use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Allocation failed for {what}: {source}")]
    AllocationError {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl TrackerError {
    pub fn allocation(what: &'static str, source: TryReserveError) -> Self {
        TrackerError::AllocationError { what, source }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrackerError::AllocationError { .. } => ErrorSeverity::Critical,
            TrackerError::IoError(_) => ErrorSeverity::Medium,
            TrackerError::ConfigError { .. } | TrackerError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::AllocationError { what, .. } => {
                format!("Out of memory while storing {}", what)
            }
            TrackerError::IoError(e) => format!("Could not write output: {}", e),
            TrackerError::ConfigError { message } => {
                format!("The built-in roster is broken: {}", message)
            }
            TrackerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Roster field '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
