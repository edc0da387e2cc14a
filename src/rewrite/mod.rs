//! Text rewriting for CSS and HTML sources.

mod css;
mod html;

pub use css::rewrite_css;
pub use html::rewrite_html;

/// A rewritten source text together with the number of substitutions made.
#[derive(Debug)]
pub struct Rewritten {
    pub text: String,
    pub replacements: usize,
}
