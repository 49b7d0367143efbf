//! CLI result presenter.

use std::time::Duration;

use num_bigint::BigUint;

use seqcalc_core::SequenceKind;

use crate::output::{format_duration, format_number};

/// CLI result presenter.
pub struct CLIResultPresenter {
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(details: bool) -> Self {
        Self { details }
    }

    /// Summary lines printed before the sequence in details mode.
    #[must_use]
    pub fn details_header(
        kind: SequenceKind,
        values: &[BigUint],
        duration: Duration,
    ) -> Vec<String> {
        let mut lines = vec![
            format!("Sequence: {kind}"),
            format!("Length: {}", format_number(values.len())),
            format!("Duration: {}", format_duration(duration)),
        ];
        if let Some(last) = values.last() {
            lines.push(format!(
                "Last term digits: {}",
                format_number(last.to_string().len())
            ));
        }
        lines
    }

    /// Print the rendered sequence, preceded by details when enabled.
    pub fn present_result(
        &self,
        kind: SequenceKind,
        values: &[BigUint],
        duration: Duration,
        rendered: &str,
    ) {
        if self.details {
            for line in Self::details_header(kind, values, duration) {
                println!("{line}");
            }
        }
        if !rendered.is_empty() {
            println!("{rendered}");
        }
    }
}
