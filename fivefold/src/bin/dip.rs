//! Runs the dependency-inversion lesson against stdout.

use fivefold::{DispatchError, StdoutSink, demo};

fn main() -> Result<(), DispatchError> {
    demo::dip::run(&StdoutSink)
}
