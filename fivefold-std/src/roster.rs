//! Ordered dispatch over runtime-registered capabilities.

use fivefold_core::{Capability, DispatchError, Effect, Sink};

/// An ordered collection of boxed capabilities.
///
/// Invocation order is registration order. The roster never inspects what
/// is behind each box; adding a new variant means registering it, not
/// editing dispatch code.
pub struct Roster {
    capabilities: Vec<Box<dyn Capability>>,
}

impl Roster {
    /// Invoke every registered capability in order, emitting each effect's
    /// line to `sink`.
    ///
    /// Stops at the first failing invocation. An empty roster is an error:
    /// dispatching to nothing is a wiring mistake, not a quiet no-op.
    pub fn dispatch_all(&self, sink: &dyn Sink) -> Result<(), DispatchError> {
        if self.capabilities.is_empty() {
            return Err(DispatchError::Empty);
        }
        for capability in &self.capabilities {
            let effect = capability.invoke()?;
            #[cfg(feature = "tracing")]
            tracing::debug!(line = effect.as_str(), "capability invoked");
            sink.emit(effect.as_str());
        }
        Ok(())
    }

    /// Invoke every registered capability in order, collecting the effects.
    pub fn dispatch_collect(&self) -> Result<Vec<Effect>, DispatchError> {
        if self.capabilities.is_empty() {
            return Err(DispatchError::Empty);
        }
        self.capabilities
            .iter()
            .map(|capability| capability.invoke().map_err(DispatchError::from))
            .collect()
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether the roster has no capabilities.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

/// Builder for constructing a [`Roster`].
pub struct RosterBuilder {
    capabilities: Vec<Box<dyn Capability>>,
}

impl Default for RosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterBuilder {
    /// Create a new empty roster builder.
    pub fn new() -> Self {
        Self {
            capabilities: Vec::new(),
        }
    }

    /// Register a capability.
    pub fn register<C: Capability>(mut self, capability: C) -> Self {
        self.capabilities.push(Box::new(capability));
        self
    }

    /// Build the roster.
    pub fn build(self) -> Roster {
        Roster {
            capabilities: self.capabilities,
        }
    }
}
