// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use std::fmt;
use std::fmt::Write;
use std::io;
use std::io::Write as _;

use crate::Error;
use crate::append::Append;
use crate::append::Stderr;
use crate::fatal;
use crate::record::Location;
use crate::record::Record;
use crate::record::Severity;

/// One diagnostic, emitted when it goes out of scope.
///
/// A `Logger` accumulates a message through [`append`](Logger::append) and writes it to its sink
/// exactly once: on [`finish`](Logger::finish) or on drop, whichever comes first. A
/// [`Severity::Fatal`] logger ends the program right after the write, according to the current
/// [`FatalMode`](crate::FatalMode).
///
/// The logger is meant to live for a single statement:
///
/// ```
/// use checklog::Logger;
/// use checklog::Severity;
///
/// Logger::new(Severity::Info).append("loaded ").append(12).append(" tensors");
/// ```
///
/// Prefer the [`log!`](crate::log) macro, which fills in the call site in detailed mode.
#[derive(Debug)]
#[must_use = "a logger emits when dropped; bind it or append to it in the same statement"]
pub struct Logger<'a> {
    severity: Severity,
    location: Option<Location>,
    message: String,
    sink: &'a dyn Append,
    finished: bool,
}

impl Logger<'static> {
    /// Create a logger writing to stderr, without a call site.
    pub fn new(severity: Severity) -> Self {
        Self::with_sink(&Stderr::DEFAULT, severity, None)
    }

    /// Create a logger writing to stderr, tagged with the given call site if any.
    pub fn with_location(severity: Severity, location: impl Into<Option<Location>>) -> Self {
        Self::with_sink(&Stderr::DEFAULT, severity, location.into())
    }
}

impl<'a> Logger<'a> {
    /// Create a logger writing to the given sink.
    pub fn with_sink(sink: &'a dyn Append, severity: Severity, location: Option<Location>) -> Self {
        Self {
            severity,
            location,
            message: String::new(),
            sink,
            finished: false,
        }
    }

    /// The severity this logger was created with.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The message accumulated so far.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Append the textual representation of `value` to the message.
    ///
    /// `value` is formatted exactly once, at the time of the call.
    pub fn append(&mut self, value: impl fmt::Display) -> &mut Self {
        // writing to a string only fails if the Display impl does
        let _ = write!(self.message, "{value}");
        self
    }

    /// Write the message to the sink, and end the program if the severity is fatal.
    ///
    /// Only the first call has any effect; dropping a finished logger does nothing.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        let record = Record::new(self.severity, self.location, &self.message);
        if let Err(err) = emit(self.sink, &record) {
            let _ = writeln!(io::stderr(), "checklog: failed to emit record: {err}");
        }

        if self.severity.is_fatal() {
            fatal::terminate(record.to_string());
        }
    }
}

fn emit(sink: &dyn Append, record: &Record) -> Result<(), Error> {
    let severity = record.severity();
    sink.append(record)
        .map_err(|err| err.with_severity(severity))?;
    if severity.is_fatal() {
        sink.flush().map_err(|err| err.with_severity(severity))?;
    }
    Ok(())
}

impl Drop for Logger<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}
