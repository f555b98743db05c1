//! Output formatting utilities for CLI.

use console::style;

/// Prints a table header with the given columns.
pub fn print_table_header(columns: &[(&str, usize)]) {
    let header: String = columns
        .iter()
        .map(|(name, width)| format!("{:<width$}", name, width = width))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", style(header).bold());

    let total_width: usize = columns.iter().map(|(_, w)| w + 1).sum();
    println!("{}", "-".repeat(total_width.saturating_sub(1)));
}

/// Prints a table row with the given values.
pub fn print_table_row(values: &[(&str, usize)]) {
    let row: String = values
        .iter()
        .map(|(val, width)| format!("{:<width$}", truncate(val, *width), width = width))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", row);
}

/// Shortens `value` to `width` characters, ending in "..." when cut.
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Prints a key-value pair with consistent formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("{:<16}{}", format!("{}:", key), value);
}

/// Prints a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(title).bold().underlined());
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_value() {
        assert_eq!(truncate("Oxford", 10), "Oxford");
    }

    #[test]
    fn test_truncate_long_value() {
        assert_eq!(truncate("Bournemouth, Christchurch and Poole", 12), "Bournemou...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Ynys Môn County", 8), "Ynys ...");
        assert_eq!(truncate("Ynys Môn", 8), "Ynys Môn");
    }
}
