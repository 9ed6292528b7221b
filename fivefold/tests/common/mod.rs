use fivefold::devices::Device;
use fivefold::{DispatchError, Effect, Sink};
use fivefold::testing::RecordingSink;

// ============================================================================
// Test Variants
// ============================================================================

/// A device defined outside the library, proving the contracts are open to
/// downstream variants.
#[derive(Debug, Clone, Copy)]
pub struct Siren;

impl Device for Siren {
    fn turn_on(&self) -> Effect {
        Effect::line("Siren is turned on.")
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Run a demo against a fresh recording sink and return what it emitted.
pub fn collect(run: fn(&dyn Sink) -> Result<(), DispatchError>) -> Vec<String> {
    let sink = RecordingSink::new();
    run(&sink).expect("demo runs cleanly");
    sink.lines()
}
