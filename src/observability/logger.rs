//! Structured JSON logger.
//!
//! One log line is one event. Keys are emitted in deterministic
//! (alphabetical) order so output is stable and grep-friendly. Errors go
//! to stderr, everything else to stdout.

use std::fmt;
use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues, rejected requests
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
pub struct Logger;

impl Logger {
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log an event with the given severity and fields.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        if severity >= Severity::Error {
            Self::write_line(&mut io::stderr(), &line);
        } else {
            Self::write_line(&mut io::stdout(), &line);
        }
    }

    /// Renders one event as a single JSON line.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        // serde_json's map keeps keys sorted, which gives the
        // deterministic ordering for free
        let mut line = Map::new();
        line.insert("event".into(), Value::String(event.to_string()));
        line.insert("severity".into(), Value::String(severity.as_str().to_string()));
        line.insert(
            "ts".into(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        for (key, value) in fields {
            line.insert((*key).to_string(), Value::String((*value).to_string()));
        }
        Value::Object(line).to_string()
    }

    fn write_line<W: Write>(writer: &mut W, line: &str) {
        // One write, one flush: a log line is never interleaved
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}
