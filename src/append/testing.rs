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


use std::sync::Mutex;

use crate::Error;
use crate::append::Append;
use crate::record::Record;

/// A sink that keeps rendered records in memory.
///
/// Useful for asserting on exactly what a logger or checker emitted.
///
/// # Examples
///
/// ```
/// use checklog::Logger;
/// use checklog::Severity;
/// use checklog::append::Testing;
///
/// let sink = Testing::default();
/// Logger::with_sink(&sink, Severity::Warning, None)
///     .append("retry #")
///     .append(3);
/// assert_eq!(sink.lines(), vec!["[WARNING] retry #3".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct Testing {
    lines: Mutex<Vec<String>>,
}

impl Testing {
    /// The rendered records received so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Append for Testing {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push(record.to_string());
        Ok(())
    }
}
