//! Exit status codes for the CLI
//!
//! grammar-validator follows standard Unix exit code conventions:
//! - 0: Success
//! - 1: Any error (unresolved entry point, bad input, unreadable grammar file,
//!   no derivation with --check-derivation)
//! - 130: User interrupted (Ctrl+C, standard SIGINT exit code)

use std::process::{ExitCode, Termination};

use crate::grammar::Derivation;

/// Exit status codes following standard Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Successful execution
    Success = 0,
    /// Any error
    Error = 1,
    /// User interrupted (Ctrl+C) - standard SIGINT code
    Interrupted = 130,
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
    /// Create an exit status from the outcome of a derivation search
    ///
    /// Without `check`, a derivation that was not found is still a normal
    /// completion: the program ran and reported its result.
    pub fn from_derivation(outcome: &Derivation, check: bool) -> Self {
        if !check || outcome.is_found() {
            ExitStatus::Success
        } else {
            ExitStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Success as u8, 0);
        assert_eq!(ExitStatus::Error as u8, 1);
        assert_eq!(ExitStatus::Interrupted as u8, 130);
    }

    #[test]
    fn test_from_derivation_unchecked() {
        assert_eq!(ExitStatus::from_derivation(&Derivation::NotFound, false), ExitStatus::Success);
        assert_eq!(ExitStatus::from_derivation(&Derivation::DepthExceeded, false), ExitStatus::Success);
    }

    #[test]
    fn test_from_derivation_checked() {
        let found = Derivation::Found(vec!["S".to_string(), "a".to_string()]);
        assert_eq!(ExitStatus::from_derivation(&found, true), ExitStatus::Success);
        assert_eq!(ExitStatus::from_derivation(&Derivation::NotFound, true), ExitStatus::Error);
        assert_eq!(ExitStatus::from_derivation(&Derivation::StateLimitReached, true), ExitStatus::Error);
    }
}
