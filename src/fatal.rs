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


//! What happens after a fatal record has been written.

use std::fmt;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

/// How a fatal record ends the program.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FatalMode {
    /// Abort the process. The only mode a production program should run with.
    Abort,
    /// Unwind with a [`Fatal`] payload so a test harness can catch it. The panic hook does not run.
    ///
    /// Falls back to [`FatalMode::Abort`] when the thread is already unwinding.
    Raise,
}

impl FatalMode {
    const fn default_mode() -> FatalMode {
        if cfg!(feature = "raise-on-fatal") {
            FatalMode::Raise
        } else {
            FatalMode::Abort
        }
    }

    const fn to_u8(self) -> u8 {
        match self {
            FatalMode::Abort => 0,
            FatalMode::Raise => 1,
        }
    }

    const fn from_u8(v: u8) -> FatalMode {
        match v {
            1 => FatalMode::Raise,
            _ => FatalMode::Abort,
        }
    }
}

static FATAL_MODE: AtomicU8 = AtomicU8::new(FatalMode::default_mode().to_u8());

/// Set the process-wide [`FatalMode`].
///
/// Defaults to [`FatalMode::Abort`], or [`FatalMode::Raise`] with the `raise-on-fatal` feature.
pub fn set_fatal_mode(mode: FatalMode) {
    FATAL_MODE.store(mode.to_u8(), Ordering::SeqCst);
}

/// The current process-wide [`FatalMode`].
pub fn fatal_mode() -> FatalMode {
    FatalMode::from_u8(FATAL_MODE.load(Ordering::SeqCst))
}

/// The panic payload of a fatal record under [`FatalMode::Raise`].
///
/// # Examples
///
/// ```
/// use checklog::Fatal;
/// use checklog::FatalMode;
///
/// checklog::set_fatal_mode(FatalMode::Raise);
///
/// let payload = std::panic::catch_unwind(|| {
///     checklog::log!(Fatal; "out of ", "memory");
/// })
/// .unwrap_err();
/// let fatal = payload.downcast::<Fatal>().unwrap();
/// assert!(fatal.message().ends_with("out of memory"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Fatal {
    message: String,
}

impl Fatal {
    /// The rendered line that was written before raising.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Fatal {}

/// End the program according to the current [`FatalMode`]. Never returns.
///
/// Raising skips the panic hook: the record already on the sink is the only report.
pub(crate) fn terminate(message: String) -> ! {
    match fatal_mode() {
        FatalMode::Raise if !std::thread::panicking() => {
            std::panic::resume_unwind(Box::new(Fatal { message }))
        }
        _ => std::process::abort(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_roundtrip_through_u8() {
        for mode in [FatalMode::Abort, FatalMode::Raise] {
            assert_eq!(FatalMode::from_u8(mode.to_u8()), mode);
        }
    }

    #[test]
    fn test_terminate_raises_fatal_payload() {
        set_fatal_mode(FatalMode::Raise);

        let payload = std::panic::catch_unwind(|| {
            terminate("[FATAL] boom".to_string());
        })
            .expect_err("terminate must not return");
        let fatal = payload.downcast::<Fatal>().unwrap();
        assert_eq!(fatal.message(), "[FATAL] boom");
        assert_eq!(fatal.to_string(), "[FATAL] boom");
    }
}
