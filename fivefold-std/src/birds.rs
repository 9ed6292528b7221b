//! # Birds (Liskov substitution)
//!
//! The classic trap, kept on purpose: [`Flight`] promises flying, so an
//! [`Ostrich`] behind it can only fail at invocation time. The corrected
//! contract is [`Locomotion`] — every bird moves somehow, and a bird that
//! runs is as good a substitute as a bird that flies.
//!
//! `Flight` exists to *illustrate* the violation; corrected designs simply
//! never put a flightless type behind a flying contract.

use fivefold_core::{Capability, CapabilityError, Effect};

/// A contract only types that truly fly should implement.
pub trait Flight: Send + Sync + 'static {
    /// Fly, if this bird can.
    fn fly(&self) -> Result<Effect, CapabilityError>;
}

/// The corrected contract: move in whatever way this bird moves.
pub trait Locomotion: Send + Sync + 'static {
    /// Move.
    fn movement(&self) -> Effect;
}

/// A bird that flies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlyingBird;

impl Flight for FlyingBird {
    fn fly(&self) -> Result<Effect, CapabilityError> {
        Ok(Effect::line("Flying"))
    }
}

impl Locomotion for FlyingBird {
    fn movement(&self) -> Effect {
        Effect::line("Flying")
    }
}

/// A bird that runs.
///
/// Its `Flight` implementation is the deliberate substitutability
/// violation: it always fails with the message `Ostriches can't fly`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ostrich;

impl Flight for Ostrich {
    fn fly(&self) -> Result<Effect, CapabilityError> {
        Err(CapabilityError::unsupported("Ostriches can't fly"))
    }
}

impl Locomotion for Ostrich {
    fn movement(&self) -> Effect {
        Effect::line("Running")
    }
}

/// Adapter presenting a [`Flight`] contract as a [`Capability`].
#[derive(Debug, Clone)]
pub struct Fly<B>(pub B);

impl<B: Flight> Capability for Fly<B> {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        self.0.fly()
    }
}

/// Adapter presenting a [`Locomotion`] contract as a [`Capability`].
#[derive(Debug, Clone)]
pub struct Locomote<B>(pub B);

impl<B: Locomotion> Capability for Locomote<B> {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        Ok(self.0.movement())
    }
}
