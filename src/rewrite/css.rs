use regex::Captures;

use super::Rewritten;
use crate::mapping::RenameMap;
use crate::scan;

/// Rewrite class selectors in `css` using `map`.
///
/// The original text is scanned, comments included, so that rewriting
/// preserves the file structure exactly. Identifiers that are not map keys
/// are copied verbatim, as is everything else.
pub fn rewrite_css(css: &str, map: &RenameMap) -> Rewritten {
    let mut replacements = 0;
    let text = scan::class_selector_regex()
        .replace_all(css, |captures: &Captures| match map.get(&captures[1]) {
            Some(token) => {
                replacements += 1;
                format!(".{}", token)
            }
            None => captures[0].to_string(),
        })
        .into_owned();

    Rewritten { text, replacements }
}
