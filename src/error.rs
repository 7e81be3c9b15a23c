//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while filtering punch actions,
//! aggregating time segments, and validating edited records.

use thiserror::Error;

use crate::models::{AttendanceStatus, PunchAction};

/// The main error type for the attendance engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidStatusCode { code: 7 };
/// assert_eq!(error.to_string(), "Invalid attendance status code: 7");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A punch action was requested from a status that does not allow it.
    ///
    /// This is filtered before any network call; the caller should surface
    /// it as a disabled action rather than an alert.
    #[error("Punch action '{action}' is not allowed from status '{current}'")]
    InvalidTransition {
        /// The cached status the action was attempted from.
        current: AttendanceStatus,
        /// The rejected punch action.
        action: PunchAction,
    },

    /// A status code outside the five enumerated values was encountered.
    ///
    /// Status codes come from the backend or a client-side cache; anything
    /// outside 0..=4 is a data-integrity error, not a new state.
    #[error("Invalid attendance status code: {code}")]
    InvalidStatusCode {
        /// The offending code.
        code: i64,
    },

    /// The backend answered with a non-success response.
    ///
    /// The message is surfaced verbatim to the user; cached state is left
    /// unchanged.
    #[error("Backend rejected the request: {message}")]
    BackendRejection {
        /// The error message returned by the backend.
        message: String,
    },

    /// The request to the backend could not complete at all.
    ///
    /// No automatic retry is performed; the user must re-trigger the action.
    #[error("Network failure: {message}")]
    NetworkFailure {
        /// A description of the transport failure.
        message: String,
    },

    /// An edited record failed pre-submission validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

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
}

/// Validation failures raised by the record editor before submission.
///
/// These block the request entirely and are surfaced inline near the
/// offending field; nothing is sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field that must be numeric could not be parsed as a
    /// non-negative number.
    #[error("Field '{field}' is not a valid non-negative number: '{value}'")]
    NotANumber {
        /// The field that failed to parse.
        field: String,
        /// The raw input value.
        value: String,
    },

    /// Recorded times are out of chronological order.
    #[error("Time ordering violation: {message}")]
    OrderingViolation {
        /// A description of which times conflict.
        message: String,
    },

    /// A required field is absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The field that is missing.
        field: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
