//! Testing utilities for fivefold.
//!
//! This module provides utilities to make testing capabilities, dispatchers,
//! and demo programs easier.
//!
//! # Features
//!
//! - [`RecordingSink`]: a sink that records every emitted line
//! - [`StaticCapability`]: a capability with a fixed effect
//! - [`FailingCapability`]: a capability that always reports unsupported
//! - [`CountingCapability`]: a capability that counts invocations

use fivefold_core::{Capability, CapabilityError, Effect, Sink};
use std::borrow::Cow;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Sink
// ============================================================================

/// A sink that records every line emitted to it.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::new();
/// demo::dip::run(&sink);
/// assert_eq!(sink.lines()[1], "LightBulb is turned on.");
/// ```
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    /// Create a new empty recording sink.
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Get the number of recorded lines.
    pub fn count(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    /// Clear all recorded lines.
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingSink {
    fn clone(&self) -> Self {
        Self {
            lines: self.lines.clone(),
        }
    }
}

impl Sink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_owned());
    }
}

// ============================================================================
// Static Capability
// ============================================================================

/// A capability that always succeeds with a fixed line.
#[derive(Debug, Clone)]
pub struct StaticCapability {
    line: Cow<'static, str>,
}

impl StaticCapability {
    /// Create a capability producing the given line.
    pub fn new(line: impl Into<Cow<'static, str>>) -> Self {
        Self { line: line.into() }
    }
}

impl Capability for StaticCapability {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        Ok(Effect::line(self.line.clone()))
    }
}

// ============================================================================
// Failing Capability
// ============================================================================

/// A capability that always reports the operation as unsupported.
#[derive(Debug, Clone)]
pub struct FailingCapability {
    message: Cow<'static, str>,
}

impl FailingCapability {
    /// Create a capability failing with the given message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Capability for FailingCapability {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        Err(CapabilityError::Unsupported(self.message.clone()))
    }
}

// ============================================================================
// Counting Capability
// ============================================================================

/// A capability that counts how often it is invoked.
///
/// Clones share the counter, so a clone can be registered while the
/// original is kept for inspection.
pub struct CountingCapability {
    count: Arc<AtomicUsize>,
    line: Cow<'static, str>,
}

impl CountingCapability {
    /// Create a counting capability producing the given line.
    pub fn new(line: impl Into<Cow<'static, str>>) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            line: line.into(),
        }
    }

    /// Get the current invocation count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Clone for CountingCapability {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            line: self.line.clone(),
        }
    }
}

impl Capability for CountingCapability {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(Effect::line(self.line.clone()))
    }
}
