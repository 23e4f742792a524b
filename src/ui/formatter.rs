//! Formatting functions for UI output.
//!
//! Versions go to stdout unstyled so they can be piped. Everything else is
//! styled with `console`, which drops the styling when the stream is not a
//! terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::git::TagKind;

/// Format an error message with a red label.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print one version per line.
pub fn display_versions<S: AsRef<str>>(versions: &[S]) {
    for version in versions {
        println!("{}", version.as_ref());
    }
}

/// Describe a created tag, e.g. "Created signed tag v1.2.3".
pub fn format_tag_created(tag: &str, kind: TagKind) -> String {
    let kind = match kind {
        TagKind::Signed => "signed",
        TagKind::Annotated => "annotated",
    };
    format!("Created {} tag {}", kind, tag)
}

/// Describe what a dry run would have done.
///
/// # Arguments
/// * `current` - The version the new tag follows
/// * `tag` - The tag that would have been created
pub fn format_dry_run(current: &str, tag: &str) -> String {
    format!("Dry run: would tag {} (current: {})", tag, current)
}
