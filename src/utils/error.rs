use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expected outcome of a loan action that did not go through.
///
/// These are returned as values and never abort a run; the caller decides
/// whether to try another item or borrower.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoanError {
    #[error("'{title}' is already on loan")]
    CheckoutUnavailable { title: String },

    #[error("{borrower} does not hold '{title}'")]
    ReturnNotHeld { borrower: String, title: String },
}

#[derive(Error, Debug)]
pub enum LendingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown borrower: {name}")]
    UnknownBorrower { name: String },

    #[error("No item titled '{title}' in the catalog")]
    ItemNotFound { title: String },

    #[error("Borrower '{name}' is registered more than once")]
    DuplicateBorrower { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Scenario,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The input named something that does not exist; fix it and rerun.
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that stopped on an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl LendingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LendingError::IoError(_) | LendingError::SerializationError(_) => ErrorCategory::Io,
            LendingError::ConfigError { .. }
            | LendingError::ConfigValidationError { .. }
            | LendingError::InvalidConfigValueError { .. }
            | LendingError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LendingError::UnknownBorrower { .. }
            | LendingError::ItemNotFound { .. }
            | LendingError::DuplicateBorrower { .. } => ErrorCategory::Scenario,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Scenario => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LendingError::IoError(_) => "Check that the file exists and the path is writable",
            LendingError::SerializationError(_) => "Re-run with --verbose and inspect the report data",
            LendingError::ConfigError { .. } | LendingError::ConfigValidationError { .. } => {
                "Check the scenario file is valid TOML with [library], [[items]] and [[steps]]"
            }
            LendingError::InvalidConfigValueError { .. } => "Fix the offending value in the scenario file",
            LendingError::MissingConfigError { .. } => "Add the missing field to the scenario file",
            LendingError::UnknownBorrower { .. } | LendingError::DuplicateBorrower { .. } => {
                "List every borrower exactly once in `borrowers`"
            }
            LendingError::ItemNotFound { .. } => "Make sure each step names a title listed under [[items]]",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Configuration => format!("The scenario configuration is invalid: {}", self),
            ErrorCategory::Scenario => format!("The scenario could not be run: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LendingError>;
