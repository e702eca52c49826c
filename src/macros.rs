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


#[doc(hidden)]
#[macro_export]
macro_rules! __location {
    () => {
        if $crate::DETAILED {
            ::core::option::Option::Some($crate::Location::new(
                ::core::file!(),
                ::core::line!(),
            ))
        } else {
            ::core::option::Option::None
        }
    };
}

/// Emit a record of the given [`Severity`](crate::Severity) to stderr.
///
/// The record is finalized at the end of the statement. A `Fatal` record ends the program after
/// it is written.
///
/// # Examples
///
/// ```
/// use checklog::log;
///
/// // a logger to append to
/// log!(Info).append("loaded ").append(12).append(" tensors");
///
/// // values appended in order
/// log!(Warning; "retry #", 3);
///
/// // format arguments
/// log!(Error, "cannot open {}: {}", "model.tflite", "not found");
/// ```
#[macro_export]
macro_rules! log {
    ($severity:ident) => {
        $crate::Logger::with_location($crate::Severity::$severity, $crate::__location!())
    };
    ($severity:ident; $($value:expr),+ $(,)?) => {{
        $crate::log!($severity)$(.append($value))+;
    }};
    ($severity:ident, $($arg:tt)+) => {{
        $crate::log!($severity).append(::core::format_args!($($arg)+));
    }};
}

/// Assert that a condition holds, or end the program with a `Fatal` record.
///
/// The record starts with the source text of the condition, followed by the optional context.
/// The context is only evaluated when the condition is false. It runs inside a closure, so
/// `?` and `return` in a context expression do not reach the enclosing function.
///
/// # Examples
///
/// ```
/// use checklog::check;
///
/// let x = 5;
/// check!(x > 0);
/// check!(x > 0; "x was ", x);
/// check!(x > 0, "x was {x}");
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::Voidifier.gate(
            $cond,
            ::core::stringify!($cond),
            $crate::__location!(),
            |_| {},
        )
    };
    ($cond:expr; $($value:expr),+ $(,)?) => {
        $crate::Voidifier.gate(
            $cond,
            ::core::stringify!($cond),
            $crate::__location!(),
            |checker| {
                checker$(.append(&$value))+;
            },
        )
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::Voidifier.gate(
            $cond,
            ::core::stringify!($cond),
            $crate::__location!(),
            |checker| {
                checker.append(::core::format_args!($($arg)+));
            },
        )
    };
}
