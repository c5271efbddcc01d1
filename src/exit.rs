// src/exit.rs
//! Standardized process exit codes for `deslop`.
//!
//! Provides a stable contract for scripts and CI gates.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DeslopExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (I/O, unexpected failure).
    Error = 1,
    /// An issue at or above the `--fail-on` threshold was found.
    Findings = 2,
    /// Configuration was rejected before any file was processed.
    InvalidConfig = 3,
}

impl DeslopExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for DeslopExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
