//! Styled terminal messages.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Build the `[ERROR]` line, styled unless colors are disabled.
#[must_use]
pub fn error_line(text: &str, color: bool) -> String {
    if color {
        format!("{} {text}", style("[ERROR]").red().bold())
    } else {
        format!("[ERROR] {text}")
    }
}

/// Print an error message on stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", error_line(text, !is_color_disabled()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_line() {
        assert_eq!(error_line("boom", false), "[ERROR] boom");
    }

    #[test]
    fn styled_error_line_keeps_message() {
        let line = error_line("boom", true);
        assert!(line.contains("[ERROR]"));
        assert!(line.ends_with("boom"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("test error");
    }
}
