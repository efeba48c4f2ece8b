//! Error types for the simulation core.

use thiserror::Error;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for all simulation core errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// A clock value was outside its valid range.
    #[error("Invalid clock value: {0}")]
    InvalidClock(String),

    /// A recipe references a resource that is not in the catalog.
    #[error("Recipe '{recipe}' references unknown resource '{resource}'")]
    DanglingResourceRef {
        /// The recipe with the broken reference.
        recipe: String,
        /// The missing resource id.
        resource: String,
    },

    /// A catalog entry was registered twice under the same id.
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),

    /// A recipe or resource definition failed a sanity check.
    #[error("Invalid catalog entry '{id}': {message}")]
    InvalidCatalogEntry {
        /// The offending entry's id.
        id: String,
        /// What was wrong with it.
        message: String,
    },

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path to the file that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },

    /// Insufficient resources in the player stockpile.
    #[error("Insufficient resources: need {required} {resource}, have {available}")]
    InsufficientResources {
        /// Resource id.
        resource: String,
        /// Amount required.
        required: u64,
        /// Amount available.
        available: u64,
    },
}
