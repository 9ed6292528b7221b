//! # The capability dispatcher
//!
//! [`Dispatcher`] is the recurring component of every example in this
//! workspace: a thin holder of one injected capability value that invokes
//! its single operation on request. It is the "after" half of each lesson —
//! the switch that no longer constructs its own light bulb, the payment
//! service that no longer matches on payment kinds.
//!
//! # Invariants
//!
//! - The dispatcher is constructed with its capability and never creates
//!   one internally (constructor injection).
//! - It holds no other state and contains no logic keyed on the concrete
//!   variant behind the capability.
//! - Operating twice in sequence yields equal effects.

use crate::{capability::Capability, effect::Effect, error::CapabilityError, sink::Sink};

/// A thin holder that invokes one operation on an injected capability.
///
/// `C` may be a concrete adapter (`Dispatcher<TurnOn<Fan>>`) for static
/// dispatch, or `Box<dyn Capability>` when the variant is chosen at runtime.
///
/// # Example
///
/// ```rust,ignore
/// let switch = Dispatcher::new(TurnOn(LightBulb));
/// assert_eq!(switch.operate()?.as_str(), "LightBulb is turned on.");
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher<C> {
    subject: C,
}

impl<C: Capability> Dispatcher<C> {
    /// Create a dispatcher around the given capability.
    pub fn new(subject: C) -> Self {
        Self { subject }
    }

    /// Invoke the capability's operation once.
    pub fn operate(&self) -> Result<Effect, CapabilityError> {
        self.subject.invoke()
    }

    /// Invoke the capability's operation and emit its line to `sink`.
    pub fn operate_into(&self, sink: &dyn Sink) -> Result<(), CapabilityError> {
        let effect = self.subject.invoke()?;
        sink.emit(effect.as_str());
        Ok(())
    }

    /// Consume the dispatcher and return the injected capability.
    pub fn into_inner(self) -> C {
        self.subject
    }
}
