//! Standard sinks.

use fivefold_core::Sink;

/// A sink that prints each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}
