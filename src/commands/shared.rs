//! Input resolution and file handling shared by `run` and `plan`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::report;

/// Resolved input set for one invocation: the HTML file, the existing CSS
/// files in deterministic order, and everything that was configured but not
/// found on disk.
#[derive(Debug)]
pub struct Inputs {
    pub html: Option<PathBuf>,
    pub css: Vec<PathBuf>,
    pub skipped: usize,
}

impl Inputs {
    /// Merge CLI arguments over the config file and expand CSS glob
    /// patterns. Missing files are reported and counted, not fatal.
    pub fn resolve(args: &CommonArgs) -> Result<Self> {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        let config = Config::load_or_default(&config_path)?;

        let html_path = args
            .html
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.html));
        let patterns = if args.css.is_empty() {
            config.css.clone()
        } else {
            args.css.clone()
        };

        let mut skipped = 0;

        let html = if html_path.exists() {
            Some(html_path)
        } else {
            report::file_missing(&html_path);
            skipped += 1;
            None
        };

        let mut css = Vec::new();
        for pattern in &patterns {
            let mut matched = expand_pattern(pattern)?;
            if matched.is_empty() {
                if is_glob(pattern) {
                    report::pattern_unmatched(pattern);
                } else {
                    report::file_missing(Path::new(pattern));
                }
                skipped += 1;
                continue;
            }
            css.append(&mut matched);
        }
        css.sort();
        css.dedup();

        Ok(Self { html, css, skipped })
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand one CSS pattern into existing file paths. A literal path is
/// returned as-is when it exists; a glob pattern yields its matches.
fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    if !is_glob(pattern) {
        let path = PathBuf::from(pattern);
        return Ok(if path.exists() { vec![path] } else { Vec::new() });
    }

    let paths = glob::glob(pattern)
        .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    Ok(paths)
}

/// Read a UTF-8 text file. Invalid UTF-8 or an IO failure is fatal for the
/// run, with the offending path in the error chain.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Overwrite `path` atomically: write the full content to a temporary file
/// in the same directory, then rename it over the original. A run
/// interrupted mid-write leaves the original file intact.
pub fn atomic_overwrite(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    use std::io::Write;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temporary file for {}", path.display()))?;
    temp.persist(path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}
