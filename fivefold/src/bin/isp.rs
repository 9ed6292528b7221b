//! Runs the interface-segregation lesson against stdout.

use fivefold::{DispatchError, StdoutSink, demo};

fn main() -> Result<(), DispatchError> {
    demo::isp::run(&StdoutSink)
}
