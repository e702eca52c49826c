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


use std::io;
use std::io::Write;

use crate::Error;
use crate::append::Append;
use crate::record::Record;

/// A sink that prints records to stderr, one line each.
///
/// Concurrent writers are not serialized beyond what the standard library's stderr lock
/// provides for a single write.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stderr {}

impl Stderr {
    /// The sink used when a logger is not given one explicitly.
    pub(crate) const DEFAULT: Stderr = Stderr {};
}

#[cfg(not(feature = "colored"))]
fn render(record: &Record) -> String {
    let mut line = record.to_string();
    line.push('\n');
    line
}

#[cfg(feature = "colored")]
fn render(record: &Record) -> String {
    use colored::Color;
    use colored::Colorize;

    use crate::record::Severity;

    let tag = format!("[{}]", record.severity());
    let tag = match record.severity() {
        Severity::Info => tag.as_str().color(Color::Green),
        Severity::Warning => tag.as_str().color(Color::Yellow),
        Severity::Error => tag.as_str().color(Color::Red),
        Severity::Fatal => tag.as_str().color(Color::Red).bold(),
    };

    let mut line = tag.to_string();
    // writing to a string only fails if a Display impl does
    let _ = record.fmt_body(&mut line);
    line.push('\n');
    line
}

impl Append for Stderr {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let line = render(record);
        io::stderr()
            .lock()
            .write_all(line.as_bytes())
            .map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        io::stderr().flush().map_err(Error::from_io_error)
    }
}
