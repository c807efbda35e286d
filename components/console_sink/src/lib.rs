//! Output sink for observable runtime behavior.
//!
//! The contract is deliberately thin: a line of text goes in, a line of text
//! is captured. [`Console`] is the value-aware front-end that turns a slice
//! of runtime values into one such line.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use value_model::Value;

/// Destination for formatted output lines.
pub trait OutputSink {
    /// Accept one line of text.
    fn write_line(&self, line: &str);
}

/// Sink that prints each line to stdout.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Sink that records lines into a shared buffer for later inspection.
///
/// Tests hold a clone of the buffer handle and assert on the captured lines
/// after the scenario runs.
pub struct CaptureSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CaptureSink {
    /// Create a capture sink with a fresh buffer.
    pub fn new() -> Self {
        CaptureSink {
            lines: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle to the shared line buffer.
    pub fn lines(&self) -> Rc<RefCell<Vec<String>>> {
        self.lines.clone()
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for CaptureSink {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Value-aware logging front-end over an [`OutputSink`].
///
/// # Examples
///
/// ```
/// use console_sink::{CaptureSink, Console};
/// use value_model::Value;
///
/// let sink = CaptureSink::new();
/// let lines = sink.lines();
/// let console = Console::new(Box::new(sink));
///
/// console.log(&[Value::string("p.x :"), Value::number(5.0)]);
/// assert_eq!(lines.borrow()[0], "p.x : 5");
/// ```
pub struct Console {
    sink: Box<dyn OutputSink>,
}

impl Console {
    /// Create a console writing to the given sink.
    pub fn new(sink: Box<dyn OutputSink>) -> Self {
        Console { sink }
    }

    /// Create a console writing to stdout.
    pub fn stdout() -> Self {
        Console::new(Box::new(StdoutSink))
    }

    /// Format each value and join them with single spaces into one line.
    fn format_values(values: &[Value]) -> String {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Emit one line built from the given values.
    pub fn log(&self, values: &[Value]) {
        self.sink.write_line(&Self::format_values(values));
    }

    /// Emit one preformatted line as-is.
    pub fn log_line(&self, line: &str) {
        self.sink.write_line(line);
    }
}
