//! Process exit codes.

/// Exit codes used by the `seqcalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid arguments; matches clap's own usage-error code.
    pub const ERROR_USAGE: i32 = 2;
    /// Output file could not be written (`EX_IOERR`).
    pub const ERROR_IO: i32 = 74;
}
