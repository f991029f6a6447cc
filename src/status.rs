//! Exit status codes for the CLI
//!
//! curlkit follows standard Unix exit code conventions:
//! - 0: The command was imported (warnings do not change this)
//! - 1: The command could not be imported, or the CLI was misused

use std::process::{ExitCode, Termination};

use crate::models::ImportResult;

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful import
    Success = 0,
    /// Import failure, invalid arguments or I/O errors
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    /// Exit status for an import outcome
    pub fn from_import(result: &ImportResult) -> Self {
        if result.success() {
            ExitStatus::Success
        } else {
            ExitStatus::Error
        }
    }
}
