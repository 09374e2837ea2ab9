use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::parser::ConfigParser;
use crate::parser::toml_file::TomlConfigParser;
use crate::parser::yaml_file::YamlConfigParser;
use crate::profile::{ProfileOverrides, RuntimeOverrides};

/// Contents of the optional user override file.
#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    pub logging: Option<LoggingCfg>,
    pub profile: Option<ProfileOverrides>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingCfg {
    pub to_file: Option<bool>,
    pub dir: Option<String>,
    pub json: Option<bool>,
    pub compact: Option<bool>,
    pub pretty: Option<bool>,
    pub level: Option<String>,
}

/// Base directory for the override file and log output.
///
/// `PROFILE_HOME` if set and non-empty, else `$HOME/.copilot-profile`,
/// else `./.copilot-profile`.
pub fn profile_home() -> PathBuf {
    if let Ok(home) = std::env::var("PROFILE_HOME")
        && !home.is_empty()
    {
        return expand_home(&home);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".copilot-profile");
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".copilot-profile")
}

pub fn default_config_path(home: &Path) -> PathBuf {
    home.join("profile.toml")
}

/// Load the user override file. A missing file is not an error.
pub fn load_user_config(path: &Path) -> anyhow::Result<Option<UserConfig>> {
    if !path.exists() {
        tracing::debug!("no user config at {}", path.display());
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let cfg = if TomlConfigParser::supports(path) {
        TomlConfigParser::parse(&content, path)?
    } else if YamlConfigParser::supports(path) {
        YamlConfigParser::parse(&content, path)?
    } else {
        anyhow::bail!(
            "unsupported config format for {} (expected .toml, .yaml or .yml)",
            path.display()
        );
    };
    tracing::info!("loaded user config from {}", path.display());
    Ok(Some(cfg))
}

/// Overrides taken from `PROFILE_*` environment variables.
pub fn env_overrides() -> anyhow::Result<ProfileOverrides> {
    env_overrides_from(|key| std::env::var(key).ok())
}

/// Like [`env_overrides`], reading variables through `lookup`.
///
/// Unset or empty variables leave the field unset. A value that does not
/// parse is an error naming the variable.
pub fn env_overrides_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ProfileOverrides> {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let mut o = ProfileOverrides {
        model: var("PROFILE_MODEL"),
        ..Default::default()
    };
    if let Some(raw) = var("PROFILE_TEMPERATURE") {
        let t = raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("PROFILE_TEMPERATURE is not a number: {raw}"))?;
        o.temperature = Some(t);
    }
    if let Some(raw) = var("PROFILE_MAX_TOKENS") {
        let n = raw
            .trim()
            .parse::<u32>()
            .with_context(|| format!("PROFILE_MAX_TOKENS is not a token count: {raw}"))?;
        o.max_tokens = Some(n);
    }

    let headed = var("PROFILE_HEADED")
        .map(|raw| {
            parse_flag(&raw).with_context(|| format!("PROFILE_HEADED is not a boolean: {raw}"))
        })
        .transpose()?;
    let timeout_ms = var("PROFILE_TIMEOUT_MS")
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .with_context(|| format!("PROFILE_TIMEOUT_MS is not a duration in ms: {raw}"))
        })
        .transpose()?;
    if headed.is_some() || timeout_ms.is_some() {
        o.runtime = Some(RuntimeOverrides {
            headed_by_default: headed,
            timeout_ms,
            ..Default::default()
        });
    }
    Ok(o)
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => anyhow::bail!("expected true, false, 1 or 0"),
    }
}

pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    use crate::ConfigurationProfile;
    use crate::profile::Layer as _;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_user_config(&dir.path().join("profile.toml")).expect("ok");
        assert!(cfg.is_none());
    }

    #[test]
    fn toml_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "profile.toml",
            r#"
[logging]
level = "debug"
json = true

[profile]
model = "gpt-5"
temperature = 0.2
extra_tools = ["lighthouse_audit"]

[profile.memory]
short_term_window = 16

[profile.memory.persistence]
store_type = "vector_db"

[profile.runtime]
headed_by_default = false
xlsx_results_sheet = "Runs"
"#,
        );
        let cfg = load_user_config(&path).expect("ok").expect("present");
        let logging = cfg.logging.expect("logging");
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(logging.json, Some(true));

        let p = cfg.profile.expect("profile");
        assert_eq!(p.model.as_deref(), Some("gpt-5"));
        assert_eq!(p.temperature, Some(0.2));
        let memory = p.memory.expect("memory");
        assert_eq!(memory.short_term_window, Some(16));
        assert_eq!(
            memory.persistence.and_then(|p| p.store_type).as_deref(),
            Some("vector_db")
        );
        let runtime = p.runtime.expect("runtime");
        assert_eq!(runtime.headed_by_default, Some(false));
        assert_eq!(runtime.xlsx_results_sheet.as_deref(), Some("Runs"));
    }

    #[test]
    fn yaml_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "profile.yml",
            r#"
profile:
  name: Checkout Flow Agent
  max_tokens: 8192
  tools:
    - playwright_test_run
    - xlsx_read
  style:
    tone: terse
"#,
        );
        let cfg = load_user_config(&path).expect("ok").expect("present");
        assert!(cfg.logging.is_none());
        let p = cfg.profile.expect("profile");
        assert_eq!(p.name.as_deref(), Some("Checkout Flow Agent"));
        assert_eq!(p.max_tokens, Some(8192));
        assert_eq!(
            p.tools,
            Some(vec!["playwright_test_run".to_string(), "xlsx_read".to_string()])
        );
        assert_eq!(p.style.and_then(|s| s.tone).as_deref(), Some("terse"));
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "profile.json", "{}");
        let err = load_user_config(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported config format"));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "profile.toml", "[profile\nmodel = ");
        let err = load_user_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("profile.toml"));
    }

    #[test]
    fn negative_integer_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "profile.toml", "[profile]\nmax_tokens = -5\n");
        assert!(load_user_config(&path).is_err());
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn unset_env_yields_no_overrides() {
        let o = env_overrides_from(env(&[("PROFILE_MODEL", ""), ("PATH", "/usr/bin")]))
            .expect("ok");
        assert!(o.model.is_none());
        assert!(o.temperature.is_none());
        assert!(o.max_tokens.is_none());
        assert!(o.runtime.is_none());
    }

    #[test]
    fn unparsable_max_tokens_names_the_variable() {
        let err = env_overrides_from(env(&[("PROFILE_MAX_TOKENS", "abc")])).unwrap_err();
        assert!(format!("{err:#}").contains("PROFILE_MAX_TOKENS"));
    }

    #[test]
    fn unparsable_headed_and_timeout_are_errors() {
        let err = env_overrides_from(env(&[("PROFILE_HEADED", "yes")])).unwrap_err();
        assert!(format!("{err:#}").contains("PROFILE_HEADED"));
        let err = env_overrides_from(env(&[("PROFILE_TIMEOUT_MS", "-1")])).unwrap_err();
        assert!(format!("{err:#}").contains("PROFILE_TIMEOUT_MS"));
    }

    #[test]
    fn env_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "profile.toml",
            r#"
[profile]
model = "gpt-5"
max_tokens = 2048

[profile.runtime]
headed_by_default = true
timeout_ms = 45000
"#,
        );
        let file = load_user_config(&path)
            .expect("ok")
            .and_then(|c| c.profile)
            .expect("profile");
        let from_env = env_overrides_from(env(&[
            ("PROFILE_MODEL", "claude-opus-4"),
            ("PROFILE_HEADED", "false"),
        ]))
        .expect("ok");

        let p = ConfigurationProfile::builder()
            .apply(&file.layer(from_env))
            .build()
            .expect("valid");
        assert_eq!(p.model(), "claude-opus-4");
        assert_eq!(p.max_tokens(), 2048);
        assert!(!p.runtime().headed_by_default);
        assert_eq!(p.runtime().timeout_ms, 45_000);
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(
            expand_home("config/deployment.yaml"),
            PathBuf::from("config/deployment.yaml")
        );
    }
}
