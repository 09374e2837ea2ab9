use env_flags::env_flags;

use copilot_profile::config::{
    default_config_path, env_overrides, expand_home, load_user_config, profile_home,
};
use copilot_profile::logging::init_tracing;
use copilot_profile::profile::Layer as _;
use copilot_profile::ConfigurationProfile;

fn main() -> anyhow::Result<()> {
    env_flags! {
        /// Override file (.toml, .yaml or .yml). Defaults to <PROFILE_HOME>/profile.toml
        PROFILE_FILE: &str = "";
    }

    let home = profile_home();
    let config_path = if !(*PROFILE_FILE).is_empty() {
        expand_home(*PROFILE_FILE)
    } else {
        default_config_path(&home)
    };

    // Logging depends on the user config, so load it first and report failures afterwards.
    let user_cfg = load_user_config(&config_path);
    let logging_cfg = user_cfg
        .as_ref()
        .ok()
        .and_then(|c| c.as_ref())
        .and_then(|c| c.logging.as_ref());
    init_tracing(&home, logging_cfg);
    tracing::debug!("profile_home={}", home.display());

    let user_cfg = match user_cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("failed to load {}: {:#}", config_path.display(), e);
            return Err(e);
        }
    };
    let file_overrides = user_cfg.and_then(|c| c.profile).unwrap_or_default();

    // Explicitly set env vars win over the file.
    let from_env = match env_overrides() {
        Ok(o) => o,
        Err(e) => {
            tracing::error!("invalid environment override: {:#}", e);
            return Err(e);
        }
    };

    let overrides = file_overrides.layer(from_env);
    let profile = match ConfigurationProfile::builder().apply(&overrides).build() {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("invalid profile: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!(
        "profile '{}' ready (model={}, tools={})",
        profile.name(),
        profile.model(),
        profile.tools().len()
    );

    let rendered = serde_json::to_string_pretty(&profile.to_mapping())?;
    println!("{rendered}");
    Ok(())
}
