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


//! Severity, source location and the finished record.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Whether records carry the `file:line` of their call site.
///
/// On with the `detailed` feature, off with the `terse` feature, and otherwise follows
/// `debug_assertions`.
pub const DETAILED: bool =
    cfg!(feature = "detailed") || (cfg!(debug_assertions) && !cfg!(feature = "terse"));

/// The seriousness of a record, from least to most serious.
///
/// Every severity is written to stderr. Only [`Severity::Fatal`] ends the process.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Designates useful information.
    Info = 0,
    /// Designates hazardous situations.
    Warning = 1,
    /// Designates errors the program survives.
    Error = 2,
    /// Designates unrecoverable errors; finalizing such a record terminates the process.
    Fatal = 3,
}

impl Severity {
    /// Return the string representation of the `Severity`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Whether finalizing a record of this severity terminates the process.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Severity::Fatal)
    }
}

impl fmt::Debug for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Severity, Self::Err> {
        for severity in [
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
        ] {
            if s.eq_ignore_ascii_case(severity.as_str()) {
                return Ok(severity);
            }
        }

        Err(Error::new(format!("malformed severity: {s:?}")))
    }
}

/// The call site a record originates from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Location {
    file: &'static str,
    line: u32,
}

impl Location {
    /// Create a location from a `file!()` and `line!()` pair.
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The source file.
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The line in the source file.
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A finished diagnostic, ready for a sink.
///
/// Renders as `[SEVERITY] [file:line] message`, or `[SEVERITY] message` without a location.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    severity: Severity,
    location: Option<Location>,
    message: &'a str,
}

impl<'a> Record<'a> {
    /// Create a record.
    pub fn new(severity: Severity, location: Option<Location>, message: &'a str) -> Self {
        Self {
            severity,
            location,
            message,
        }
    }

    /// The severity of the record.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The call site, if the record was created in detailed mode.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// The accumulated message text.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// Write everything after the `[SEVERITY]` tag, including the leading space.
    pub(crate) fn fmt_body(&self, f: &mut impl fmt::Write) -> fmt::Result {
        if let Some(location) = self.location {
            write!(f, " [{location}]")?;
        }
        write!(f, " {}", self.message)
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.severity)?;
        self.fmt_body(f)
    }
}
