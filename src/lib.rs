//! Classmin - CSS class obfuscator for static sites
//!
//! Classmin rewrites CSS class names across a static site (one HTML file plus
//! its CSS files) to short tokens (`c1`, `c2`, ...), keeping selectors and
//! `class` attributes consistent. Classes that are never defined in the
//! scanned CSS (icon fonts, third-party frameworks) are left untouched.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and dispatch)
//! - `config`: Configuration file loading and parsing
//! - `scan`: Class selector extraction from CSS sources
//! - `mapping`: Rename map construction (identifier -> short token)
//! - `rewrite`: CSS and HTML text rewriting
//! - `commands`: Per-subcommand orchestration
//! - `report`: Console output formatting

pub mod cli;
pub mod commands;
pub mod config;
pub mod mapping;
pub mod report;
pub mod rewrite;
pub mod scan;
