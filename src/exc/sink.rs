/// Destination for assertion diagnostics.
///
/// The engine only writes formatted messages; it never reads back.
pub trait DiagnosticSink {
    /// Writes an error-level message.
    fn error(&mut self, message: &str);

    /// Writes a warning-level message.
    fn warning(&mut self, message: &str);
}

/// Default sink, emitting `tracing` events under the `lambdascript::exc`
/// target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn error(&mut self, message: &str) {
        tracing::error!(target: "lambdascript::exc", "{message}");
    }

    fn warning(&mut self, message: &str) {
        tracing::warn!(target: "lambdascript::exc", "{message}");
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn error(&mut self, message: &str) {
        (**self).error(message);
    }

    fn warning(&mut self, message: &str) {
        (**self).warning(message);
    }
}

/// Severity of a diagnostic line collected by [`RecordingSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Error-level line.
    Error,
    /// Warning-level line.
    Warning,
}

/// Sink that keeps every message in memory.
///
/// ```rust
/// use lambdascript::exc::{DiagnosticSink, Level, RecordingSink};
///
/// let mut sink = RecordingSink::default();
/// sink.warning("careful");
/// assert_eq!(sink.entries(), [(Level::Warning, "careful".to_string())]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSink {
    entries: Vec<(Level, String)>,
}

impl RecordingSink {
    /// Returns every recorded line, oldest first.
    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Returns the recorded lines of one level.
    pub fn messages(&self, level: Level) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(entry_level, _)| *entry_level == level)
            .map(|(_, message)| message.as_str())
    }
}

impl DiagnosticSink for RecordingSink {
    fn error(&mut self, message: &str) {
        self.entries.push((Level::Error, message.to_owned()));
    }

    fn warning(&mut self, message: &str) {
        self.entries.push((Level::Warning, message.to_owned()));
    }
}
