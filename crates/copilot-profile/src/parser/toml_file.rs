//! Parser for `.toml` user config files.

use std::path::Path;

use anyhow::Context as _;

use crate::config::UserConfig;

use super::{ConfigParser, has_extension};

pub struct TomlConfigParser;

impl ConfigParser for TomlConfigParser {
    fn supports(path: &Path) -> bool {
        has_extension(path, &["toml"])
    }

    fn parse(content: &str, path: &Path) -> anyhow::Result<UserConfig> {
        let cfg: UserConfig = toml::from_str(content)
            .with_context(|| format!("invalid TOML in {}", path.display()))?;
        Ok(cfg)
    }
}
