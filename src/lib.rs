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


//! Checklog emits severity-tagged diagnostics to stderr and turns failed assertions into fatal
//! records.
//!
//! # Overview
//!
//! A [`Logger`] accumulates one message and writes it exactly once, when it goes out of scope.
//! Records of [`Severity::Fatal`] end the program after being written. [`check!`] builds a
//! fatal [`Checker`] only when its condition is false, so the context it formats costs nothing
//! while the assertion holds.
//!
//! Every record is a single line on stderr:
//!
//! ```text
//! [WARNING] [src/main.rs:12] retry #3
//! [FATAL] [src/main.rs:20] x > 0 x was -5
//! ```
//!
//! The `[file:line]` segment is present in detailed mode only; see [`DETAILED`].
//!
//! # Examples
//!
//! ```
//! use checklog::check;
//! use checklog::log;
//! use checklog::seq;
//!
//! let shape = vec![1, 224, 224, 3];
//! log!(Info; "input shape ", seq(&shape));
//! check!(shape.len() == 4; "rank was ", shape.len());
//! ```
//!
//! # Fatal records in tests
//!
//! By default a fatal record aborts the process. Set [`FatalMode::Raise`] (or enable the
//! `raise-on-fatal` feature) to unwind with a [`Fatal`] payload instead:
//!
//! ```
//! use checklog::FatalMode;
//!
//! checklog::set_fatal_mode(FatalMode::Raise);
//! let x = -5;
//! let result = std::panic::catch_unwind(|| checklog::check!(x > 0; "x was ", x));
//! assert!(result.is_err());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;

mod checker;
mod error;
mod fatal;
mod gate;
mod logger;
mod macros;
mod record;
mod seq;

pub use self::append::Append;
pub use self::checker::Checker;
pub use self::error::Error;
pub use self::fatal::Fatal;
pub use self::fatal::FatalMode;
pub use self::fatal::fatal_mode;
pub use self::fatal::set_fatal_mode;
pub use self::gate::Voidifier;
pub use self::logger::Logger;
pub use self::record::DETAILED;
pub use self::record::Location;
pub use self::record::Record;
pub use self::record::Severity;
pub use self::seq::Seq;
pub use self::seq::seq;
