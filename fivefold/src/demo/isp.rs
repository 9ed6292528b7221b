//! Interface segregation: the robot that doesn't eat.

use fivefold_core::{DispatchError, Effect, Sink};
use fivefold_std::workers::{Feedable, HumanWorker, Robot, Workable};

/// The "before" contract: one trait for everything a workplace does.
trait Worker {
    fn work(&self) -> Effect;
    fn eat(&self) -> Effect;
}

/// A robot forced through the monolithic contract. It has to answer for
/// `eat` even though the answer is meaningless.
struct CrudeRobot;

impl Worker for CrudeRobot {
    fn work(&self) -> Effect {
        Effect::line("Robot is working.")
    }

    fn eat(&self) -> Effect {
        // Robots don't eat.
        Effect::line("Robot pretends to eat.")
    }
}

/// Run the lesson, emitting its fixed output sequence to `sink`.
pub fn run(sink: &dyn Sink) -> Result<(), DispatchError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(lesson = "isp", "running demo");

    sink.emit("Problematic Code with a Monolithic Contract:");
    let crude = CrudeRobot;
    sink.emit(crude.work().as_str());
    sink.emit(crude.eat().as_str());

    sink.emit("");
    sink.emit("Corrected Code with Segregated Contracts:");
    sink.emit(HumanWorker.work().as_str());
    sink.emit(HumanWorker.eat().as_str());
    sink.emit(Robot.work().as_str());
    // There is no line for a robot eating: Robot never implements Feedable.

    Ok(())
}
