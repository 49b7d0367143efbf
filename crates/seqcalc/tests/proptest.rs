//! Property-based tests for the command line.

use assert_cmd::Command;
use proptest::prelude::*;

const KINDS: [&str; 5] = ["fibonacci", "prime", "square", "triangular", "factorial"];

fn run(kind: &str, length: usize) -> Vec<String> {
    let output = Command::cargo_bin("seqcalc")
        .expect("binary not found")
        .env_remove("SEQCALC_SEQUENCE")
        .env_remove("SEQCALC_LENGTH")
        .args(["--sequence", kind, "--length", &length.to_string(), "--format", "lines"])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    /// The CLI prints one extra term when length grows by one.
    #[test]
    fn cli_monotonic_extension(idx in 0usize..5, n in 0usize..60) {
        let kind = KINDS[idx];
        let shorter = run(kind, n);
        let longer = run(kind, n + 1);
        prop_assert_eq!(longer.len(), n + 1);
        prop_assert_eq!(&longer[..n], &shorter[..]);
    }

    /// CLI output matches the library.
    #[test]
    fn cli_matches_library(idx in 0usize..5, n in 0usize..40) {
        let kind = KINDS[idx];
        let expected: Vec<String> = seqcalc_core::generate(kind, i64::try_from(n).unwrap())
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        prop_assert_eq!(run(kind, n), expected);
    }
}
