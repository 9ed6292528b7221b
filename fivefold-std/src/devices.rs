//! # Devices (dependency inversion)
//!
//! The switch-and-light-bulb example. A switch that constructs its own
//! `LightBulb` is welded to it; a switch built on the [`Device`] capability
//! controls anything that can be turned on, injected from outside.
//!
//! The "before" half — a switch with a hardwired bulb — lives with the demo
//! programs in the `fivefold` crate; this module is the corrected design.

use fivefold_core::{Capability, CapabilityError, Dispatcher, Effect};

/// Anything that can be turned on.
pub trait Device: Send + Sync + 'static {
    /// Turn the device on.
    fn turn_on(&self) -> Effect;
}

/// A light bulb.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightBulb;

impl Device for LightBulb {
    fn turn_on(&self) -> Effect {
        Effect::line("LightBulb is turned on.")
    }
}

/// A fan.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fan;

impl Device for Fan {
    fn turn_on(&self) -> Effect {
        Effect::line("Fan is turned on.")
    }
}

/// Adapter presenting a [`Device`]'s turn-on operation as a [`Capability`].
#[derive(Debug, Clone)]
pub struct TurnOn<D>(pub D);

impl<D: Device> Capability for TurnOn<D> {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        Ok(self.0.turn_on())
    }
}

/// A switch over any injected [`Device`].
pub type Switch<D> = Dispatcher<TurnOn<D>>;

/// Build a [`Switch`] controlling the given device.
pub fn switch<D: Device>(device: D) -> Switch<D> {
    Dispatcher::new(TurnOn(device))
}
