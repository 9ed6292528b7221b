//! # The capability contract
//!
//! A capability is a minimal contract naming one operation a type may
//! support: turn on, process a payment, move. Every higher piece of this
//! workspace (the [`Dispatcher`], the roster, the demo programs) works
//! against this trait and never against a concrete variant.
//!
//! # Design
//!
//! - **Single operation**: the contract is [`invoke`](Capability::invoke)
//!   and nothing else. Contracts that would need two operations are two
//!   capabilities.
//! - **Object-safe**: `Box<dyn Capability>` is itself a capability, so
//!   heterogeneous collections need no extra machinery.
//! - **Stateless**: `invoke` takes `&self` and must not observe prior
//!   invocations; calling it twice yields equal outcomes.
//!
//! Domain traits (`Device`, `Payment`, ...) live in `fivefold-std` and are
//! bridged to this trait by small adapter structs, one per operation.

use crate::{effect::Effect, error::CapabilityError};

/// A minimal contract naming one operation a type may support.
///
/// Implementations describe their observable behavior as an [`Effect`]
/// rather than printing directly, which keeps the behavior assertable.
/// An implementation that legitimately supports the operation returns
/// `Ok`; one that cannot perform it returns
/// [`CapabilityError::Unsupported`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Capability`",
    label = "missing `Capability` implementation",
    note = "implement `invoke`, or wrap the value in a domain adapter such as `TurnOn` or `Charge`"
)]
pub trait Capability: Send + Sync + 'static {
    /// Perform the capability's single operation.
    fn invoke(&self) -> Result<Effect, CapabilityError>;
}

// Boxed capabilities dispatch through to the inner value.
impl Capability for Box<dyn Capability> {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        (**self).invoke()
    }
}

impl<C: Capability> Capability for std::sync::Arc<C> {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        (**self).invoke()
    }
}
