//! Error handling and exit codes.

use seqcalc_core::exit_codes;
use seqcalc_core::SequenceError;

/// Map a generation error to its exit code.
pub fn handle_error(err: &SequenceError) -> i32 {
    match err {
        SequenceError::InvalidArgument(_) => exit_codes::ERROR_USAGE,
        SequenceError::Io(_) => exit_codes::ERROR_IO,
    }
}

/// Map any application error to its exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SequenceError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
