//! User config parsers for the supported file formats.
//!
//! Each parser declares a `supports` predicate over file paths and a `parse`
//! function that returns a `UserConfig`.

use std::path::Path;

use anyhow::Result;

use crate::config::UserConfig;

/// Parser trait implemented by each file format.
pub trait ConfigParser {
    fn supports(path: &Path) -> bool;
    fn parse(content: &str, path: &Path) -> Result<UserConfig>;
}

pub mod toml_file;
pub mod yaml_file;

pub(crate) fn has_extension(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| exts.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}
