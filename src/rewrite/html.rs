use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Rewritten;
use crate::mapping::RenameMap;

/// `class` attribute values in either quote style. The two alternation
/// branches stand in for a quote backreference, which the regex crate does
/// not support; `[^"]`/`[^']` lets the value span newlines.
static CLASS_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class=(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Rewrite `class` attribute values in `html` using `map`.
///
/// Each value is split on whitespace, known tokens are replaced, and the
/// tokens are rejoined with single spaces in the original quote style.
/// Whitespace inside the attribute is therefore normalized; token order is
/// preserved. Tokens absent from the map (third-party classes) are kept
/// byte-identical.
pub fn rewrite_html(html: &str, map: &RenameMap) -> Rewritten {
    let mut replacements = 0;
    let text = CLASS_ATTR_REGEX
        .replace_all(html, |captures: &Captures| {
            let (value, quote) = match captures.get(1) {
                Some(double_quoted) => (double_quoted.as_str(), '"'),
                None => (&captures[2], '\''),
            };

            let tokens: Vec<&str> = value
                .split_whitespace()
                .map(|token| match map.get(token) {
                    Some(renamed) => {
                        replacements += 1;
                        renamed
                    }
                    None => token,
                })
                .collect();

            format!("class={}{}{}", quote, tokens.join(" "), quote)
        })
        .into_owned();

    Rewritten { text, replacements }
}
