//! # Workers (interface segregation)
//!
//! One monolithic worker contract forces a [`Robot`] to answer for eating.
//! Split into [`Workable`] and [`Feedable`], each type implements only what
//! it supports: the robot works, the human works and eats, and no
//! implementation is a lie.

use fivefold_core::{Capability, CapabilityError, Effect};

/// Something that can work.
pub trait Workable: Send + Sync + 'static {
    /// Do the work.
    fn work(&self) -> Effect;
}

/// Something that needs feeding.
pub trait Feedable: Send + Sync + 'static {
    /// Eat.
    fn eat(&self) -> Effect;
}

/// A human worker: works and eats.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanWorker;

impl Workable for HumanWorker {
    fn work(&self) -> Effect {
        Effect::line("HumanWorker is working.")
    }
}

impl Feedable for HumanWorker {
    fn eat(&self) -> Effect {
        Effect::line("HumanWorker is eating.")
    }
}

/// A robot: works, does not eat, and is never asked to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Robot;

impl Workable for Robot {
    fn work(&self) -> Effect {
        Effect::line("Robot is working.")
    }
}

/// Adapter presenting a [`Workable`]'s work operation as a [`Capability`].
#[derive(Debug, Clone)]
pub struct Work<W>(pub W);

impl<W: Workable> Capability for Work<W> {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        Ok(self.0.work())
    }
}

/// Adapter presenting a [`Feedable`]'s eat operation as a [`Capability`].
#[derive(Debug, Clone)]
pub struct Feed<F>(pub F);

impl<F: Feedable> Capability for Feed<F> {
    fn invoke(&self) -> Result<Effect, CapabilityError> {
        Ok(self.0.eat())
    }
}

#[cfg(test)]
mod tests {
    use super::{Feed, HumanWorker, Robot, Work};
    use fivefold_core::Capability;

    #[test]
    fn each_type_implements_only_the_contracts_it_supports() {
        assert_eq!(
            Work(HumanWorker).invoke().unwrap().as_str(),
            "HumanWorker is working."
        );
        assert_eq!(
            Feed(HumanWorker).invoke().unwrap().as_str(),
            "HumanWorker is eating."
        );
        assert_eq!(Work(Robot).invoke().unwrap().as_str(), "Robot is working.");
        // Feed(Robot) does not compile: Robot is not Feedable.
    }
}
