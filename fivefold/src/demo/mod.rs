//! The five runnable lessons.
//!
//! Each submodule pairs the flawed "before" design with the corrected one
//! and exposes a `run` function that emits the lesson's fixed output
//! sequence to a [`Sink`]. The flawed types live here rather than in the
//! library: they are the "before" halves of the lessons, and nothing should
//! build on them.
//!
//! [`Sink`]: fivefold_core::Sink

pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;
