//! # fivefold-core
//!
//! Core contracts for the fivefold design-principle examples.
//!
//! This crate has minimal dependencies and defines the one structural
//! pattern every example in the workspace repeats: a **capability** (a
//! contract naming a single operation), a **variant** (a concrete type
//! implementing that contract), and a **dispatcher** (a thin holder that
//! invokes the operation on an injected capability without knowing which
//! variant is behind it).
//!
//! # Layers
//!
//! ## Contract ([`Capability`])
//!
//! The single-operation trait everything dispatches through. Object-safe;
//! variants that cannot perform the operation signal
//! [`CapabilityError::Unsupported`] rather than misbehaving.
//!
//! ## Outcome ([`Effect`])
//!
//! What an invocation observably does: one literal output line, carried as
//! a value so tests can assert it exactly. Rendering happens at the edge,
//! through a [`Sink`].
//!
//! ## Dispatch ([`Dispatcher`])
//!
//! The injected-reference holder. Constructed with its capability from
//! outside, stateless beyond that reference, identical code path for every
//! conforming variant.
//!
//! # Error types
//!
//! - [`CapabilityError`] - invocation-level errors
//! - [`DispatchError`] - dispatch-level errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod capability;
mod dispatch;
mod effect;
mod error;
mod sink;

// Re-exports
pub use capability::Capability;
pub use dispatch::Dispatcher;
pub use effect::Effect;
pub use error::{BoxError, CapabilityError, DispatchError};
pub use sink::Sink;
