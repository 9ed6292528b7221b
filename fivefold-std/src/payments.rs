//! # Payments (open/closed)
//!
//! A service that matches on a payment-kind string must be edited for every
//! new kind. Built on the [`Payment`] capability, new kinds are added by
//! implementing the trait; nothing that dispatches changes.

use fivefold_core::{Capability, CapabilityError, Effect};

/// A way of paying.
pub trait Payment: Send + Sync + 'static {
    /// Process this payment.
    fn process(&self) -> Effect;
}

/// Payment by credit card.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCard;

impl Payment for CreditCard {
    fn process(&self) -> Effect {
        Effect::line("CreditCard payment processed.")
    }
}

/// Payment via PayPal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayPal;

impl Payment for PayPal {
    fn process(&self) -> Effect {
        Effect::line("PayPal payment processed.")
    }
}

/// Adapter presenting a [`Payment`]'s process operation as a [`Capability`].
#[derive(Debug, Clone)]
pub struct Charge<P>(pub P);

impl<P: Payment> Capability for Charge<P> {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        Ok(self.0.process())
    }
}
