use anyhow::Result;

use super::shared::{Inputs, read_text};
use crate::cli::{ExitStatus, PlanArgs};
use crate::mapping::RenameMap;
use crate::report;
use crate::scan;

/// Dry run: scan the CSS inputs and print the rename map that `run` would
/// apply, without writing anything.
pub fn plan(args: PlanArgs) -> Result<ExitStatus> {
    let inputs = Inputs::resolve(&args.common)?;

    let mut css_contents = Vec::with_capacity(inputs.css.len());
    for path in &inputs.css {
        if args.common.verbose {
            report::scanned_file(path);
        }
        css_contents.push(read_text(path)?);
    }

    let defined = scan::scan_all(css_contents.iter().map(String::as_str));
    let map = RenameMap::build(&defined);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&map.to_json())?);
    } else {
        report::classes_found(map.len());
        report::plan_table(&map);
    }

    Ok(if inputs.skipped == 0 {
        ExitStatus::Success
    } else {
        ExitStatus::Skipped
    })
}
