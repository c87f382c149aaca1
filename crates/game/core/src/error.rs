//! Common error infrastructure for encounter-core.
//!
//! Domain-specific errors (`ActionError`, `InvariantError`, `ConfigError`) live
//! next to the code they validate. This module provides the shared severity
//! classification so the engine and runtime can treat them uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may pick another action and continue
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency that should be investigated
/// - **Fatal**: the snapshot itself is corrupted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - another action may succeed.
    ///
    /// Examples: action not legal in the current scene
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: attack target index outside the roster
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: feature not implemented, invariant broken by a transition
    Internal,

    /// Fatal error - snapshot corrupted, cannot continue.
    ///
    /// Examples: battle scene with an empty roster
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all encounter-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable strings suitable for logs and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
