//! Error types for fivefold.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CapabilityError`] - Errors from a single capability invocation
//! - [`DispatchError`] - Errors from dispatching to one or more capabilities

use std::borrow::Cow;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from invoking a single capability.
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// The variant behind the capability cannot perform the operation.
    ///
    /// The display of this variant is the message verbatim, with no prefix:
    /// callers that catch it report the exact text (e.g. `Ostriches can't
    /// fly`).
    #[error("{0}")]
    Unsupported(Cow<'static, str>),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

impl CapabilityError {
    /// Shorthand for [`CapabilityError::Unsupported`].
    pub fn unsupported(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unsupported(message.into())
    }
}

/// Errors from dispatch operations.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A capability invocation failed.
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// No capabilities were registered to dispatch to.
    #[error("no capabilities registered")]
    Empty,

    /// No variant is known for the given kind.
    ///
    /// Only produced by kind-keyed dispatch, the "before" half of the
    /// open/closed example. Capability-based dispatch has no lookup to fail.
    #[error("unknown kind: {0}")]
    UnknownKind(String),
}

// Convenience conversions
impl From<BoxError> for CapabilityError {
    fn from(err: BoxError) -> Self {
        CapabilityError::Custom(err)
    }
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Capability(CapabilityError::Custom(err))
    }
}
