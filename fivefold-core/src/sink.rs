//! Output sink trait.

/// A destination for effect lines.
///
/// The demo programs write to a stdout-backed sink; tests use a recording
/// sink. Concrete implementations live in `fivefold-std`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Sink`",
    label = "missing `Sink` implementation",
    note = "a Sink receives output lines; use `StdoutSink` or `testing::RecordingSink` from `fivefold-std`"
)]
pub trait Sink {
    /// Emit one output line.
    fn emit(&self, line: &str);
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}
