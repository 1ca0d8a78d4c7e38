//! Error types for the Commission Engine.
//!
//! The pure calculation core never fails. Errors only surface from the
//! configuration loader and from the external data sources that feed the
//! fetch pipeline.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Commission Engine.
///
/// # Example
///
/// ```
/// use commission_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/plans.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/plans.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An engine setting held a value outside its allowed range.
    #[error("Invalid setting '{field}': {message}")]
    InvalidSettings {
        /// The setting that was invalid.
        field: String,
        /// A description of what made the setting invalid.
        message: String,
    },

    /// A renewal multiplier tier was structurally invalid.
    #[error("Invalid renewal multiplier tier in plan '{plan_id}': {message}")]
    InvalidTier {
        /// The plan the tier belongs to.
        plan_id: Uuid,
        /// A description of what made the tier invalid.
        message: String,
    },

    /// No compensation plan exists with the requested id.
    #[error("Compensation plan not found: {plan_id}")]
    PlanNotFound {
        /// The plan id that was not found.
        plan_id: Uuid,
    },

    /// The external data source failed while fetching rows.
    #[error("Data source error: {message}")]
    DataSource {
        /// The message reported by the data source.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
