//! Runs the open/closed lesson against stdout.

use fivefold::{DispatchError, StdoutSink, demo};

fn main() -> Result<(), DispatchError> {
    demo::ocp::run(&StdoutSink)
}
