//! Report formatting - pure formatting plus the CLI display helpers.

/// Format a resolved tag list for display, optionally under a context label
/// such as a commit hash or ticket number.
///
/// With a label: `"abc123 is in: 7.1.0, 23.1.0"`. Without one, just the
/// comma-joined tags.
pub fn format_report(label: Option<&str>, tags: &[String]) -> String {
    let joined = tags.join(", ");
    match label {
        Some(label) => format!("{} is in: {}", label, joined),
        None => joined,
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}
