//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a timing notification on its own line.
pub fn print_timing(text: &str) {
    if is_color_disabled() {
        println!("{text}");
    } else {
        println!("{}", style(text).yellow());
    }
}

/// Print a de-emphasized line, such as a history entry.
pub fn print_dim(text: &str) {
    if is_color_disabled() {
        println!("{text}");
    } else {
        println!("{}", style(text).dim());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("Error: {text}");
    } else {
        eprintln!("{} {text}", style("Error:").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_functions_do_not_panic() {
        print_header("Search");
        print_timing("Time taken: 0.00000100 seconds");
        print_dim("[12:00:00] RSA: Encrypted: 'hi to [1, 2]'");
        print_error("Invalid input");
    }

    #[test]
    fn print_functions_with_empty_text() {
        print_header("");
        print_timing("");
        print_dim("");
        print_error("");
    }
}
