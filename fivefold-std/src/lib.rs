//! # fivefold-std
//!
//! Standard implementations for the fivefold design-principle examples.
//!
//! This crate provides:
//! - **The five domains**: [`devices`] (dependency inversion), [`payments`]
//!   (open/closed), [`birds`] (Liskov substitution), [`workers`] (interface
//!   segregation), [`accounts`] (single responsibility)
//! - **Dynamic dispatch**: [`Roster`] over runtime-registered capabilities
//! - **Sinks**: [`StdoutSink`]
//! - **Test utilities**: the [`testing`] module

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use fivefold_core;

// Modules
pub mod accounts;
pub mod birds;
pub mod devices;
pub mod payments;
pub mod roster;
pub mod sinks;
pub mod testing;
pub mod workers;

pub use roster::{Roster, RosterBuilder};
pub use sinks::StdoutSink;
