//! User-facing failure taxonomy for console operations.
//!
//! Every network-originating failure is mapped at its call site into exactly
//! one of these variants and surfaced as a single notice; validation failures
//! are detected before any state mutation. History parse failures never reach
//! this enum; they degrade silently to an empty history (`core::history`).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    InvalidCredentials,
    SignupRejected,
    UploadFailed,
    FetchFailed,
    PasswordMismatch,
    PasswordReuse,
    NoDataToExport,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::SignupRejected => "Signup failed. Email might already exist",
            Self::UploadFailed => "Upload failed",
            Self::FetchFailed => "Couldn't reach the server",
            Self::PasswordMismatch => "Passwords do not match",
            Self::PasswordReuse => "New password matches the current one",
            Self::NoDataToExport => "Upload a dataset before exporting a report",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ConsoleError {}
