//! Console output formatting.
//!
//! This module is separate from the transformation logic so the library can
//! be used without printing side effects.

use std::path::Path;

use colored::Colorize;

use crate::mapping::RenameMap;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn scanning(css_count: usize) {
    println!(
        "Scanning {} CSS {} for class definitions...",
        css_count,
        if css_count == 1 { "file" } else { "files" }
    );
}

pub fn scanned_file(path: &Path) {
    println!("  {}", path.display().to_string().dimmed());
}

pub fn classes_found(count: usize) {
    println!(
        "Found {} unique defined {}.",
        count.to_string().bold(),
        if count == 1 { "class" } else { "classes" }
    );
}

pub fn file_updated(path: &Path, replacements: usize) {
    println!(
        "{} {} ({} {})",
        SUCCESS_MARK.green(),
        path.display(),
        replacements,
        if replacements == 1 {
            "replacement"
        } else {
            "replacements"
        }
    );
}

pub fn file_missing(path: &Path) {
    eprintln!(
        "{} {}: {}",
        FAILURE_MARK.yellow(),
        "missing input".yellow(),
        path.display()
    );
}

pub fn pattern_unmatched(pattern: &str) {
    eprintln!(
        "{} {}: {}",
        FAILURE_MARK.yellow(),
        "pattern matched no files".yellow(),
        pattern
    );
}

pub fn map_written(path: &Path) {
    println!("{} rename map written to {}", SUCCESS_MARK.green(), path.display());
}

pub fn done() {
    println!("{}", "Done.".bold().green());
}

/// Print the rename map as an aligned two-column table.
pub fn plan_table(map: &RenameMap) {
    let width = map
        .entries()
        .map(|(identifier, _)| identifier.len())
        .max()
        .unwrap_or(0);

    for (identifier, token) in map.entries() {
        println!("  {:<width$}  {}", identifier, token.cyan(), width = width);
    }
}
