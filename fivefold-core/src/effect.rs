//! Effect value for capability invocations.

use std::borrow::Cow;
use std::fmt;

/// The observable outcome of invoking a capability: exactly one output line.
///
/// Capabilities in this workspace do not print; they *describe* what they
/// would print. Rendering is left to a [`Sink`] at the program edge, which
/// keeps every output line assertable in tests.
///
/// # Example
///
/// ```rust,ignore
/// let effect = Effect::line("LightBulb is turned on.");
/// assert_eq!(effect.as_str(), "LightBulb is turned on.");
/// ```
///
/// [`Sink`]: crate::Sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    line: Cow<'static, str>,
}

impl Effect {
    /// Create an effect carrying the given output line.
    pub fn line(line: impl Into<Cow<'static, str>>) -> Self {
        Self { line: line.into() }
    }

    /// The output line this effect carries.
    pub fn as_str(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

impl From<&'static str> for Effect {
    fn from(line: &'static str) -> Self {
        Self::line(line)
    }
}

impl From<String> for Effect {
    fn from(line: String) -> Self {
        Self::line(line)
    }
}
