//! Parser for `.yaml` / `.yml` user config files.

use std::path::Path;

use anyhow::Context as _;

use crate::config::UserConfig;

use super::{ConfigParser, has_extension};

pub struct YamlConfigParser;

impl ConfigParser for YamlConfigParser {
    fn supports(path: &Path) -> bool {
        has_extension(path, &["yaml", "yml"])
    }

    fn parse(content: &str, path: &Path) -> anyhow::Result<UserConfig> {
        // An empty YAML document is `null`, not an empty mapping.
        if content.trim().is_empty() {
            return Ok(UserConfig::default());
        }
        let cfg: UserConfig = serde_yaml::from_str(content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?;
        Ok(cfg)
    }
}
