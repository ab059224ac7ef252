//! Common error infrastructure for sewing-core.
//!
//! Domain-specific errors (e.g. [`crate::InputError`]) are defined next to the
//! types they validate. This module only provides the shared classification
//! used by callers to decide how to react.
//!
//! # Design Principles
//!
//! - **Validate at the boundary**: malformed levels, star tiers or concentration
//!   are rejected when the input snapshot is built, never inside the engine
//! - **No action is not an error**: an empty recommendation is a regular result
//! - **Severity Classification**: errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can adjust the turn state and retry.
    ///
    /// Examples: not enough concentration left to pay for a skill
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: level outside the table, unknown needle kind
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all sewing-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait SewingError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
