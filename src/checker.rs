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

use crate::Logger;
use crate::append::Append;
use crate::record::Location;
use crate::record::Severity;

/// A failed assertion.
///
/// A `Checker` exists only once its condition is known to be false. Its message starts with the
/// source text of the condition, and dropping it finalizes a [`Severity::Fatal`] record, so the
/// program never survives a checker.
///
/// Checkers are created by the [`check!`](crate::check) macro through
/// [`Voidifier::gate`](crate::Voidifier::gate).
#[derive(Debug)]
pub struct Checker<'a> {
    logger: Logger<'a>,
    has_context: bool,
}

impl Checker<'static> {
    /// Create a checker for `condition` writing to stderr, without a call site.
    pub fn new(condition: &str) -> Self {
        Self::seeded(Logger::new(Severity::Fatal), condition)
    }

    /// Create a checker for `condition` writing to stderr, tagged with the given call site if any.
    pub fn with_location(condition: &str, location: impl Into<Option<Location>>) -> Self {
        Self::seeded(Logger::with_location(Severity::Fatal, location), condition)
    }
}

impl<'a> Checker<'a> {
    /// Create a checker for `condition` writing to the given sink.
    pub fn with_sink(sink: &'a dyn Append, condition: &str, location: Option<Location>) -> Self {
        Self::seeded(Logger::with_sink(sink, Severity::Fatal, location), condition)
    }

    fn seeded(mut logger: Logger<'a>, condition: &str) -> Self {
        logger.append(condition);
        Self {
            logger,
            has_context: false,
        }
    }

    /// Append context explaining the failure, such as the values involved.
    ///
    /// The first piece of context is separated from the condition text by a space.
    pub fn append(&mut self, value: impl fmt::Display) -> &mut Self {
        if !self.has_context {
            self.has_context = true;
            self.logger.append(' ');
        }
        self.logger.append(value);
        self
    }

    /// Borrow the checker mutably, for binding it in a single expression.
    pub fn by_ref(&mut self) -> &mut Self {
        self
    }

    /// The message accumulated so far, starting with the condition text.
    pub fn message(&self) -> &str {
        self.logger.message()
    }
}

impl Drop for Checker<'_> {
    fn drop(&mut self) {
        self.logger.finish();
    }
}

#[cfg(test)]
mod tests {
    use std::panic;

    use super::*;
    use crate::Fatal;
    use crate::FatalMode;
    use crate::append::Testing;

    fn raised(f: impl FnOnce()) -> Fatal {
        crate::set_fatal_mode(FatalMode::Raise);
        let payload = panic::catch_unwind(panic::AssertUnwindSafe(f))
            .expect_err("a dropped checker must not return");
        *payload.downcast::<Fatal>().unwrap()
    }

    #[test]
    fn test_message_starts_with_condition() {
        let sink = Testing::default();
        let x = -5;
        let fatal = raised(|| {
            Checker::with_sink(&sink, "x > 0", None)
                .append("x was ")
                .append(x);
        });

        insta::assert_snapshot!(fatal.message(), @"[FATAL] x > 0 x was -5");
        assert_eq!(sink.lines(), vec![fatal.message().to_string()]);
    }

    #[test]
    fn test_condition_only() {
        let sink = Testing::default();
        let location = Location::new("src/graph.rs", 88);
        let fatal = raised(|| {
            let _ = Checker::with_sink(&sink, "!nodes.is_empty()", Some(location));
        });

        insta::assert_snapshot!(fatal.message(), @"[FATAL] [src/graph.rs:88] !nodes.is_empty()");
    }

    #[test]
    fn test_by_ref_keeps_accumulating() {
        let sink = Testing::default();
        let fatal = raised(|| {
            let mut checker = Checker::with_sink(&sink, "a == b", None);
            checker.by_ref().append(1).append(" != ").append(2);
            assert_eq!(checker.message(), "a == b 1 != 2");
        });

        assert_eq!(fatal.message(), "[FATAL] a == b 1 != 2");
    }
}
