//! Runs the Liskov-substitution lesson against stdout.

use fivefold::{DispatchError, StdoutSink, demo};

fn main() -> Result<(), DispatchError> {
    demo::lsp::run(&StdoutSink)
}
