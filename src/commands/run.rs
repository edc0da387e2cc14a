use anyhow::{Context, Result};

use super::shared::{Inputs, atomic_overwrite, read_text};
use crate::cli::{ExitStatus, RunArgs};
use crate::mapping::RenameMap;
use crate::report;
use crate::rewrite::{rewrite_css, rewrite_html};
use crate::scan;

/// The full two-pass transformation: scan every CSS input, build the rename
/// map, then rewrite each CSS file and the HTML file in place.
///
/// All CSS files are read before any file is written, so a failure during
/// scanning leaves the site untouched.
pub fn run(args: RunArgs) -> Result<ExitStatus> {
    let inputs = Inputs::resolve(&args.common)?;

    report::scanning(inputs.css.len());
    let mut css_contents = Vec::with_capacity(inputs.css.len());
    for path in &inputs.css {
        if args.common.verbose {
            report::scanned_file(path);
        }
        css_contents.push(read_text(path)?);
    }

    let defined = scan::scan_all(css_contents.iter().map(String::as_str));
    report::classes_found(defined.len());

    let map = RenameMap::build(&defined);

    for (path, content) in inputs.css.iter().zip(&css_contents) {
        let rewritten = rewrite_css(content, &map);
        atomic_overwrite(path, &rewritten.text)?;
        report::file_updated(path, rewritten.replacements);
    }

    if let Some(html_path) = &inputs.html {
        let content = read_text(html_path)?;
        let rewritten = rewrite_html(&content, &map);
        atomic_overwrite(html_path, &rewritten.text)?;
        report::file_updated(html_path, rewritten.replacements);
    }

    if let Some(map_path) = &args.write_map {
        let json = serde_json::to_string_pretty(&map.to_json())?;
        std::fs::write(map_path, json + "\n")
            .with_context(|| format!("Failed to write rename map: {}", map_path.display()))?;
        report::map_written(map_path);
    }

    report::done();

    Ok(if inputs.skipped == 0 {
        ExitStatus::Success
    } else {
        ExitStatus::Skipped
    })
}
