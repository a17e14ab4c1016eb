use log::info;

/// Destination of diagnostic lines, one line per decoded descriptor.
pub trait Sink {
    fn write(&mut self, line: &str);
}

/// Forwards every line to the `log` facade under the `protocol` target.
///
/// Whether anything is printed, and where, is up to the installed logger.
#[derive(Clone, Debug, Default)]
pub struct LogSink {
    indent: String,
}

impl LogSink {
    pub const TARGET: &'static str = "protocol";

    /// `indent` spaces are prepended to every line.
    pub fn new(indent: usize) -> LogSink {
        LogSink {
            indent: " ".repeat(indent),
        }
    }

    #[inline(always)]
    pub fn indent(&self) -> usize {
        self.indent.len()
    }
}

impl Sink for LogSink {
    fn write(&mut self, line: &str) {
        info!(target: Self::TARGET, "{}{}", self.indent, line);
    }
}

/// Keeps every line in memory.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    lines: Vec<String>,
}

impl CaptureSink {
    pub fn new() -> CaptureSink {
        CaptureSink::default()
    }

    #[inline(always)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Sink for CaptureSink {
    fn write(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{CaptureSink, LogSink, Sink};

    #[test]
    fn capture() {
        let mut sink = CaptureSink::new();
        sink.write("a");
        sink.write("b");

        assert_eq!(sink.lines(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn log_sink_indent() {
        let mut sink = LogSink::new(4);
        assert_eq!(sink.indent(), 4);

        // no logger installed, must be a no-op
        sink.write("line");
    }
}
