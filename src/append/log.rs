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


use crate::Error;
use crate::append::Append;
use crate::record::Record;
use crate::record::Severity;

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error | Severity::Fatal => log::Level::Error,
        }
    }
}

/// A sink that forwards records to the [`log`] facade.
///
/// The record keeps its `[SEVERITY]` tag in the message, since `log` has no fatal level.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Log {}

impl Append for Log {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let level = log::Level::from(record.severity());
        let location = record.location();
        log::logger().log(
            &log::Record::builder()
                .level(level)
                .target("checklog")
                .file_static(location.map(|l| l.file()))
                .line(location.map(|l| l.line()))
                .args(format_args!("{record}"))
                .build(),
        );
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        log::logger().flush();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::Logger;

    struct Capture(Mutex<Vec<(log::Level, String)>>);

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            let mut lines = self.0.lock().unwrap();
            lines.push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn test_forwards_to_log_facade() {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        let sink = Log::default();
        Logger::with_sink(&sink, Severity::Warning, None).append("retry #").append(3);

        let lines = CAPTURE.0.lock().unwrap();
        assert_eq!(
            *lines,
            vec![(log::Level::Warn, "[WARNING] retry #3".to_string())]
        );
    }
}
