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


use std::cell::Cell;
use std::fmt;
use std::panic;

use checklog::Fatal;
use checklog::FatalMode;
use checklog::check;
use checklog::seq;

struct Expensive<'a>(&'a Cell<u32>);

impl fmt::Display for Expensive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.set(self.0.get() + 1);
        f.write_str("expensive")
    }
}

fn raised(f: impl FnOnce()) -> Fatal {
    checklog::set_fatal_mode(FatalMode::Raise);
    let payload = panic::catch_unwind(panic::AssertUnwindSafe(f)).expect_err("check must fail");
    *payload.downcast::<Fatal>().expect("payload must be Fatal")
}

#[test]
fn test_true_condition_never_evaluates_context() {
    let formatted = Cell::new(0);
    let computed = Cell::new(0);
    let compute = || {
        computed.set(computed.get() + 1);
        vec![1, 2, 3]
    };

    let x = 5;
    check!(x > 0; "x was ", x, Expensive(&formatted), seq(&compute()));
    check!(x > 0, "{} {}", Expensive(&formatted), seq(&compute()));
    check!(x > 0);

    assert_eq!(formatted.get(), 0);
    assert_eq!(computed.get(), 0);
}

#[test]
fn test_false_condition_evaluates_context_once() {
    let formatted = Cell::new(0);
    let x = -5;
    let fatal = raised(|| check!(x > 0; "x was ", x, ", ", Expensive(&formatted)));

    assert_eq!(formatted.get(), 1);
    assert!(fatal.message().starts_with("[FATAL] "));
    assert!(fatal.message().ends_with("x > 0 x was -5, expensive"));
}

#[test]
fn test_format_form() {
    let dims = vec![1, 224, 224];
    let fatal = raised(|| check!(dims.len() == 4, "rank {} for {}", dims.len(), seq(&dims)));

    assert!(fatal.message().ends_with("dims.len() == 4 rank 3 for {1, 224, 224}"));
}

#[test]
fn test_location_segment_follows_build_mode() {
    let fatal = raised(|| check!(false));
    let message = fatal.message();

    if checklog::DETAILED {
        let line = line!() - 4;
        assert_eq!(message, format!("[FATAL] [{}:{line}] false", file!()));
    } else {
        assert_eq!(message, "[FATAL] false");
    }
}
