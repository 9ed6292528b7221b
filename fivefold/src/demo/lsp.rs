//! Liskov substitution: the ostrich behind a flying contract.

use fivefold_core::{CapabilityError, DispatchError, Dispatcher, Sink};
use fivefold_std::birds::{Fly, FlyingBird, Locomote, Ostrich};

/// Run the lesson, emitting its fixed output sequence to `sink`.
///
/// The flawed half substitutes an [`Ostrich`] into the flying contract and
/// catches the failure locally, reporting the message and continuing —
/// exactly the runtime surprise the corrected movement contract removes.
pub fn run(sink: &dyn Sink) -> Result<(), DispatchError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(lesson = "lsp", "running demo");

    sink.emit("Problematic Code with a Flying Contract:");
    Dispatcher::new(Fly(FlyingBird)).operate_into(sink)?;
    match Dispatcher::new(Fly(Ostrich)).operate() {
        Ok(effect) => sink.emit(effect.as_str()),
        // The substitutability violation, surfaced as its message.
        Err(CapabilityError::Unsupported(message)) => sink.emit(&message),
        Err(other) => return Err(other.into()),
    }

    sink.emit("");
    sink.emit("Corrected Code with a Movement Contract:");
    Dispatcher::new(Locomote(FlyingBird)).operate_into(sink)?;
    Dispatcher::new(Locomote(Ostrich)).operate_into(sink)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::testing::RecordingSink;

    #[test]
    fn emits_the_fixed_sequence() {
        let sink = RecordingSink::new();
        super::run(&sink).unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "Problematic Code with a Flying Contract:",
                "Flying",
                "Ostriches can't fly",
                "",
                "Corrected Code with a Movement Contract:",
                "Flying",
                "Running",
            ]
        );
    }
}
