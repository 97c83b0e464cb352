//! Output sinks for formatted diagnostic lines
//!
//! Reporters emit one text line per reported item through an [`InfoSink`]
//! passed in by the caller. Keeping the sink injected (rather than a
//! process-global logger) lets tests capture output and lets engines route
//! diagnostics wherever their logging goes.

use std::io::Write;

/// Capability to receive formatted diagnostic lines
///
/// A line does not include a trailing newline; writer-backed sinks add
/// their own framing. Sink failures are the sink's concern, not the
/// reporter's, so `emit` is infallible.
pub trait InfoSink {
    fn emit(&mut self, line: &str);
}

/// Sink that forwards each line to the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl InfoSink for LogSink {
    fn emit(&mut self, line: &str) {
        log::info!(target: "netinfo", "{line}");
    }
}

/// Sink that captures lines in memory, for tests and assertions
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines captured so far, in emission order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain the captured lines, leaving the sink empty
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// All captured lines joined with newlines
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl InfoSink for BufferSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Sink that writes newline-terminated lines to any [`std::io::Write`]
///
/// Write failures are reported through `log::warn!` and otherwise dropped;
/// a broken stderr must not abort a diagnostic pass.
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> InfoSink for WriteSink<W> {
    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            log::warn!(target: "netinfo", "sink write failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_captures_in_order() {
        let mut sink = BufferSink::new();
        sink.emit("first");
        sink.emit("second");
        assert_eq!(sink.lines(), &["first".to_string(), "second".to_string()]);
        assert_eq!(sink.to_text(), "first\nsecond");
    }

    #[test]
    fn test_buffer_sink_take_drains() {
        let mut sink = BufferSink::new();
        sink.emit("only");
        let lines = sink.take();
        assert_eq!(lines, vec!["only".to_string()]);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_write_sink_adds_newlines() {
        let mut sink = WriteSink::new(Vec::new());
        sink.emit("a");
        sink.emit("b");
        let buf = sink.into_inner();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_sink_as_trait_object() {
        // Reporters take `&mut S where S: InfoSink + ?Sized`, so a boxed
        // sink must work too.
        let mut sink: Box<dyn InfoSink> = Box::<BufferSink>::default();
        sink.emit("via dyn");
    }
}
