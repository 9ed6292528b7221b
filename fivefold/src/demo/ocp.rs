//! Open/closed: payment kinds.

use fivefold_core::{DispatchError, Effect, Sink};
use fivefold_std::RosterBuilder;
use fivefold_std::payments::{Charge, CreditCard, Payment, PayPal};

/// The "before" design: dispatch keyed on a kind string.
///
/// Every new payment kind means another arm here. Unknown kinds can only
/// fail at runtime.
fn process_by_kind(kind: &str) -> Result<Effect, DispatchError> {
    match kind {
        "CreditCard" => Ok(CreditCard.process()),
        "PayPal" => Ok(PayPal.process()),
        other => Err(DispatchError::UnknownKind(other.to_owned())),
    }
}

/// A payment kind added without touching any dispatch code: the corrected
/// design is open to it.
struct Voucher;

impl Payment for Voucher {
    fn process(&self) -> Effect {
        Effect::line("Voucher payment processed.")
    }
}

/// Run the lesson, emitting its fixed output sequence to `sink`.
pub fn run(sink: &dyn Sink) -> Result<(), DispatchError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(lesson = "ocp", "running demo");

    sink.emit("Problematic Code with Kind-Keyed Dispatch:");
    sink.emit(process_by_kind("CreditCard")?.as_str());
    sink.emit(process_by_kind("PayPal")?.as_str());

    sink.emit("");
    sink.emit("Corrected Code with Capability Dispatch:");
    let roster = RosterBuilder::new()
        .register(Charge(CreditCard))
        .register(Charge(PayPal))
        .register(Charge(Voucher))
        .build();
    roster.dispatch_all(sink)?;

    Ok(())
}
