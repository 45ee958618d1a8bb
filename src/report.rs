//! Failure termination: clean per-cause exit codes, or an abrupt abort for
//! library findings when built for fuzzing.

use std::process;

use crate::error::ZtripError;

/// How fatal findings terminate the process, decided once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureAction {
    /// Exit with the error's own code. Batch and regression use.
    Exit,
    /// Abort so the fuzz engine records a fault with a stack trace.
    Abort,
}

impl FailureAction {
    /// Action selected by the build: [`FailureAction::Abort`] when the
    /// `fuzzing` feature is enabled, [`FailureAction::Exit`] otherwise.
    pub fn from_build() -> Self {
        if cfg!(feature = "fuzzing") {
            FailureAction::Abort
        } else {
            FailureAction::Exit
        }
    }
}

/// Print the diagnostic to stderr and terminate.
///
/// Only findings that implicate the library abort under fuzzing; environment
/// errors always exit cleanly so they are not collected as crashes.
pub fn report_failure(action: FailureAction, err: &ZtripError) -> ! {
    eprintln!("{err}");
    if action == FailureAction::Abort && err.is_finding() {
        process::abort();
    }
    process::exit(err.exit_code())
}
