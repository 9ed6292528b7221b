//! Dependency inversion: the switch and the light bulb.

use fivefold_core::{DispatchError, Sink};
use fivefold_std::devices::{Device, Fan, LightBulb, switch};

/// The "before" design: a switch that constructs its own light bulb.
///
/// Swapping in a fan means editing this type; testing it means testing a
/// real bulb. The corrected design injects any [`Device`] instead.
struct HardwiredSwitch {
    bulb: LightBulb,
}

impl HardwiredSwitch {
    fn new() -> Self {
        Self { bulb: LightBulb }
    }

    fn operate(&self, sink: &dyn Sink) {
        sink.emit(self.bulb.turn_on().as_str());
    }
}

/// Run the lesson, emitting its fixed output sequence to `sink`.
pub fn run(sink: &dyn Sink) -> Result<(), DispatchError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(lesson = "dip", "running demo");

    sink.emit("Problematic Code with Direct Dependency:");
    let hardwired = HardwiredSwitch::new();
    hardwired.operate(sink);

    sink.emit("");
    sink.emit("Corrected Code with Dependency Inversion:");
    switch(LightBulb).operate_into(sink)?;
    switch(Fan).operate_into(sink)?;

    Ok(())
}
