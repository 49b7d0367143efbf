//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line shown in `--version` and debug logs.
#[must_use]
pub fn full_version() -> String {
    format!("seqcalc {}", version())
}
