//! # fivefold - The Five Principles, One Pattern
//!
//! `fivefold` demonstrates the five SOLID design principles (SRP, OCP, LSP,
//! ISP, DIP) through a single recurring structure: a **capability** names
//! one operation, a **variant** implements it, and a **dispatcher** invokes
//! it on an injected value without knowing which variant is behind it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fivefold::devices::{LightBulb, switch};
//!
//! let switch = switch(LightBulb);
//! assert_eq!(switch.operate()?.as_str(), "LightBulb is turned on.");
//! ```
//!
//! The [`demo`] module holds the five runnable lessons, each pairing the
//! flawed "before" design with the corrected one; the `srp`, `ocp`, `lsp`,
//! `isp` and `dip` binaries run them against stdout.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use fivefold_core::{
    // Errors
    BoxError,
    // Contract
    Capability,
    CapabilityError,
    DispatchError,
    // Dispatch
    Dispatcher,
    // Outcome
    Effect,
    Sink,
};

pub use fivefold_std::{
    // Dynamic dispatch
    Roster,
    RosterBuilder,
    // Sinks
    StdoutSink,
    // The five domains
    accounts,
    birds,
    devices,
    payments,
    testing,
    workers,
};

pub mod demo;
