//! Runs the single-responsibility lesson against stdout.

use fivefold::{DispatchError, StdoutSink, demo};

fn main() -> Result<(), DispatchError> {
    demo::srp::run(&StdoutSink)
}
