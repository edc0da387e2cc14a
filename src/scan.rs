//! Class selector extraction from CSS sources.
//!
//! The scanner is deliberately shallow: it does not parse CSS, it extracts
//! every identifier that follows a literal `.` after block comments have been
//! stripped. This reliably catches class selectors in common stylesheets. A
//! known limitation is that a `.` inside a string or `url(...)` can yield a
//! false positive when it is immediately followed by identifier characters
//! (e.g. `url(sprite.v2)` contributes `v2`); such a class is simply never
//! referenced by the HTML, so the extra map entry is harmless.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// CSS identifier grammar, anchored on a leading literal `.`.
static CLASS_SELECTOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(-?[_a-zA-Z][_a-zA-Z0-9-]*)").unwrap());

/// Block comments, non-greedy, spanning newlines.
static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Regex shared with the CSS rewriter so that scanning and rewriting agree
/// on what counts as a class selector.
pub(crate) fn class_selector_regex() -> &'static Regex {
    &CLASS_SELECTOR_REGEX
}

/// Collect every class identifier defined in `css` into `defined`.
///
/// Comments are stripped first so that commented-out rules do not count as
/// definitions. Malformed CSS is not an error; whatever matches the
/// identifier grammar is extracted.
pub fn collect_defined_classes(css: &str, defined: &mut BTreeSet<String>) {
    let stripped = BLOCK_COMMENT_REGEX.replace_all(css, "");
    for captures in CLASS_SELECTOR_REGEX.captures_iter(&stripped) {
        defined.insert(captures[1].to_string());
    }
}

/// Scan several CSS sources and return the union of their defined classes.
pub fn scan_all<'a, I>(sources: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut defined = BTreeSet::new();
    for css in sources {
        collect_defined_classes(css, &mut defined);
    }
    defined
}
