//! Typed error handling for the admin core
//!
//! Filtering, aggregation and reordering never fail: their degenerate cases
//! resolve to sentinel values. Errors only surface from mutations on the
//! console and from loading configuration.
//!
//! # Error Categories
//!
//! - [`ConsoleError`]: entity lookup, state transitions and input validation
//! - [`ConfigError`]: configuration file reading, parsing and validation
//! - [`ParseLabelError`]: an unknown label for a closed enumeration
//!
//! # Example
//!
//! ```rust,ignore
//! match console.advance_report("r-1") {
//!     Ok(report) => println!("now {}", report.status),
//!     Err(ConsoleError::InvalidTransition { from, .. }) => {
//!         println!("report already {}", from);
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use crate::core::entity::{ClosedEnum, Entity};
use thiserror::Error;

/// The main error type for console mutations
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// No entity with this id is held
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: &'static str, id: String },

    /// An entity with this id is already held
    #[error("{entity_type} with id '{id}' already exists")]
    AlreadyExists { entity_type: &'static str, id: String },

    /// The requested status change is not an edge of the entity's lifecycle
    #[error("{entity_type} '{id}' cannot move from '{from}' to '{to}'")]
    InvalidTransition {
        entity_type: &'static str,
        id: String,
        from: String,
        to: String,
    },

    /// An input value was rejected
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ConsoleError {
    /// Shorthand for [`ConsoleError::NotFound`]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        ConsoleError::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// The entity cannot move from its current status to `to`
    pub fn invalid_transition<T: Entity>(entity: &T, to: T::Status) -> Self {
        ConsoleError::InvalidTransition {
            entity_type: T::resource_name_singular(),
            id: entity.id().to_string(),
            from: entity.status().as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }

    /// Shorthand for [`ConsoleError::Validation`]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConsoleError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleError::NotFound { .. } => "ENTITY_NOT_FOUND",
            ConsoleError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
            ConsoleError::InvalidTransition { .. } => "INVALID_TRANSITION",
            ConsoleError::Validation { .. } => "VALIDATION_ERROR",
            ConsoleError::Config(e) => e.error_code(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", describe_file(.file))]
    Parse {
        file: Option<String>,
        message: String,
    },

    /// Parsed configuration violates a constraint
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

fn describe_file(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::Invalid(_) => "CONFIG_INVALID",
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            file: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            file: None,
            message: err.to_string(),
        }
    }
}

/// A label that does not belong to a closed enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

impl From<ParseLabelError> for ConsoleError {
    fn from(err: ParseLabelError) -> Self {
        ConsoleError::Validation {
            field: err.kind.to_string(),
            message: err.to_string(),
        }
    }
}
