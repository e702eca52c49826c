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
use std::io;

use crate::record::Severity;

/// The error type for failures inside the diagnostic pipeline.
///
/// None of these ever reach the code that logs or checks; a record that cannot be
/// written is reported once on stderr and otherwise dropped.
#[derive(Debug)]
pub struct Error {
    message: String,
    severity: Option<Severity>,
    source: Option<anyhow::Error>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(severity) = self.severity {
            write!(f, " ({severity} record)")?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|v| v.as_ref())
    }
}

impl Error {
    /// Create a new Error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: None,
            source: None,
        }
    }

    /// Attach the severity of the record that could not be handled.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set the underlying cause.
    pub fn with_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        self.source = Some(src.into());
        self
    }

    /// The severity of the record involved, if known.
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// A sink failed to write or flush a record.
    pub fn from_io_error(err: io::Error) -> Error {
        Error::new("failed to write record").with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_severity_and_source() {
        let err = Error::from_io_error(io::Error::other("broken pipe"))
            .with_severity(Severity::Fatal);

        insta::assert_snapshot!(
            err.to_string(),
            @"failed to write record (FATAL record): broken pipe"
        );
        assert_eq!(err.severity(), Some(Severity::Fatal));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display_message_only() {
        let err = Error::new("malformed severity");
        assert_eq!(err.to_string(), "malformed severity");
        assert_eq!(err.severity(), None);
        assert!(std::error::Error::source(&err).is_none());
    }
}
