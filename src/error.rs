//! Crate-wide error type.
//!
//! Every failure carries the process exit code it maps to:
//!
//! - `2`: invalid input (parameter file, grid request)
//! - `3`: numeric failure (non-finite value where an export needs a number)
//! - `4`: output failure (directories, files, plot rendering)

/// Exit code for invalid user input.
pub const EXIT_INPUT: u8 = 2;
/// Exit code for numeric failures.
pub const EXIT_NUMERIC: u8 = 3;
/// Exit code for output/IO failures.
pub const EXIT_OUTPUT: u8 = 4;

#[derive(Clone, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}
