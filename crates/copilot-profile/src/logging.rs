//! Tracing setup. Logs always go to stderr so stdout carries only the
//! serialized profile.

use std::path::Path;

use env_flags::env_flags;
use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Layer, Registry, prelude::*};

use crate::config::LoggingCfg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
    Pretty,
    Full,
}

/// JSON wins over compact, compact over pretty; none set means the full formatter.
pub fn select_format(json: bool, compact: bool, pretty: bool) -> LogFormat {
    if json {
        LogFormat::Json
    } else if compact {
        LogFormat::Compact
    } else if pretty {
        LogFormat::Pretty
    } else {
        LogFormat::Full
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

fn fmt_layer<W>(writer: W, ansi: bool, format: LogFormat) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(writer);
    match format {
        LogFormat::Json => base.json().boxed(),
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Pretty => base.pretty().boxed(),
        LogFormat::Full => base.boxed(),
    }
}

/// Daily-rolling, non-blocking writer under `dir`, creating it if needed.
/// Lines are flushed when the returned guard drops.
fn file_writer(dir: &Path) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, "copilot-profile.log");
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber. Env flags win over the user config's
/// `[logging]` table, which wins over built-in defaults.
pub fn init_tracing(home: &Path, cfg: Option<&LoggingCfg>) {
    env_flags! {
        /// Tracing filter, e.g. "info", "debug", or targets format.
        RUST_LOG: &str = "info";
        /// Preferred filter env (alias). If set, overrides RUST_LOG.
        TRACING_FILTER: &str = "";
        /// Pretty formatting for logs (ignored if TRACING_JSON=true).
        TRACING_PRETTY: bool = false;
        /// Compact single-line formatting for logs (ignored if TRACING_JSON=true)
        TRACING_COMPACT: bool = true;
        /// JSON formatting for logs
        TRACING_JSON: bool = false;
        /// If true, also log to file under <PROFILE_HOME>/logs or LOG_DIR
        LOG_TO_FILE: bool = false;
        /// Optional explicit log directory. Defaults to <PROFILE_HOME>/logs
        LOG_DIR: &str = "";
    }

    let env_set = |k: &str| std::env::var_os(k).is_some();

    let mut level = if !(*TRACING_FILTER).is_empty() {
        (*TRACING_FILTER).to_string()
    } else {
        (*RUST_LOG).to_string()
    };
    let mut json = *TRACING_JSON;
    let mut compact = *TRACING_COMPACT;
    let mut pretty = *TRACING_PRETTY;
    let mut to_file = *LOG_TO_FILE;
    let mut log_dir = if !(*LOG_DIR).is_empty() {
        Some(crate::config::expand_home(*LOG_DIR))
    } else {
        None
    };

    if let Some(cfg) = cfg {
        if !(env_set("TRACING_FILTER") || env_set("RUST_LOG"))
            && let Some(l) = cfg.level.as_ref()
        {
            level = l.clone();
        }
        if !env_set("TRACING_JSON")
            && let Some(v) = cfg.json
        {
            json = v;
        }
        if !env_set("TRACING_COMPACT")
            && let Some(v) = cfg.compact
        {
            compact = v;
        }
        if !env_set("TRACING_PRETTY")
            && let Some(v) = cfg.pretty
        {
            pretty = v;
        }
        if !env_set("LOG_TO_FILE")
            && let Some(v) = cfg.to_file
        {
            to_file = v;
        }
        if !env_set("LOG_DIR")
            && let Some(dir) = cfg.dir.as_ref()
        {
            log_dir = Some(crate::config::expand_home(dir));
        }
    }

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));
    let format = select_format(json, compact, pretty);

    static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(std::io::stderr, true, format)];
    let mut dir_error = None;
    if to_file {
        let dir = log_dir.unwrap_or_else(|| home.join("logs"));
        match file_writer(&dir) {
            Ok((nb, guard)) => {
                let _ = FILE_GUARD.set(guard);
                layers.push(fmt_layer(nb, false, format));
            }
            Err(e) => dir_error = Some((dir, e)),
        }
    }

    if let Err(e) = tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
    {
        tracing::debug!("tracing already set: {:?}", e);
    }
    if let Some((dir, e)) = dir_error {
        tracing::warn!("failed to create log dir {}: {}", dir.display(), e);
    }
}
