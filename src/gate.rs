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


use crate::Checker;
use crate::record::Location;

/// The short-circuit gate between an assertion and its failure report.
///
/// [`gate`](Voidifier::gate) evaluates to `()` whether the assertion holds or not, and only
/// builds the [`Checker`] and runs the closure describing the failure when it does not. Whatever
/// the closure formats, however expensive, costs nothing while the assertion holds.
///
/// # Examples
///
/// ```
/// use checklog::Voidifier;
///
/// let mut calls = 0;
/// Voidifier.gate(1 + 1 == 2, "1 + 1 == 2", None, |checker| {
///     calls += 1;
///     checker.append("arithmetic is broken");
/// });
/// assert_eq!(calls, 0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Voidifier;

impl Voidifier {
    /// Report `condition` as failed unless `holds`.
    ///
    /// On failure, a checker seeded with `condition` is passed to `describe`, then dropped, which
    /// finalizes the fatal record.
    #[inline]
    pub fn gate<F>(self, holds: bool, condition: &str, location: Option<Location>, describe: F)
    where
        F: FnOnce(&mut Checker<'static>),
    {
        if holds {
            return;
        }
        self.fail(condition, location, describe);
    }

    #[cold]
    #[inline(never)]
    fn fail<F>(self, condition: &str, location: Option<Location>, describe: F)
    where
        F: FnOnce(&mut Checker<'static>),
    {
        let mut checker = Checker::with_location(condition, location);
        describe(checker.by_ref());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic;

    use super::*;
    use crate::Fatal;
    use crate::FatalMode;

    #[test]
    fn test_holding_condition_skips_describe() {
        let calls = Cell::new(0);
        Voidifier.gate(true, "true", None, |checker| {
            calls.set(calls.get() + 1);
            checker.append("never");
        });
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_failing_condition_runs_describe_once() {
        crate::set_fatal_mode(FatalMode::Raise);

        let calls = Cell::new(0);
        let location = Location::new("src/lib.rs", 3);
        let payload = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            Voidifier.gate(false, "len < cap", Some(location), |checker| {
                calls.set(calls.get() + 1);
                checker.append("len=").append(9);
            });
        }))
        .expect_err("a failed gate must not return");

        assert_eq!(calls.get(), 1);
        let fatal = payload.downcast::<Fatal>().unwrap();
        insta::assert_snapshot!(fatal.message(), @"[FATAL] [src/lib.rs:3] len < cap len=9");
    }
}
