//! Partial profile overrides read from user config or the environment.
//!
//! Every leaf is optional; `None` means "keep whatever the lower layer says".

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub memory: Option<MemoryOverrides>,
    /// Replaces the tool list.
    pub tools: Option<Vec<String>>,
    /// Appended after `tools` (or the defaults).
    pub extra_tools: Option<Vec<String>>,
    pub style: Option<StyleOverrides>,
    pub runtime: Option<RuntimeOverrides>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemoryOverrides {
    pub approach: Option<String>,
    pub short_term_window: Option<u32>,
    pub long_term_summary: Option<bool>,
    pub summary_interval: Option<u32>,
    pub persistence: Option<PersistenceOverrides>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersistenceOverrides {
    pub enabled: Option<bool>,
    pub store_type: Option<String>,
    pub store_location: Option<String>,
    pub namespaces: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub tone: Option<String>,
    pub voice: Option<String>,
    pub response_structure: Option<Vec<String>>,
    pub use_file_block_syntax: Option<bool>,
    pub markdown_files_four_backticks: Option<bool>,
    pub include_commit_message_when_writing: Option<bool>,
    pub never_store_secrets: Option<bool>,
    pub image_policy: Option<String>,
    pub max_inline_code_lines: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeOverrides {
    pub headed_by_default: Option<bool>,
    pub config_file: Option<String>,
    pub workflow_doc: Option<String>,
    pub default_screenshots_dir: Option<String>,
    pub default_results_dir: Option<String>,
    pub default_logs_dir: Option<String>,
    pub xlsx_testcases_path: Option<String>,
    pub xlsx_results_sheet: Option<String>,
    pub timeout_ms: Option<u64>,
}

/// Field-wise merge where the upper layer wins.
pub trait Layer: Sized {
    fn layer(self, top: Self) -> Self;
}

fn layer_nested<T: Layer>(base: Option<T>, top: Option<T>) -> Option<T> {
    match (base, top) {
        (Some(b), Some(t)) => Some(b.layer(t)),
        (b, t) => t.or(b),
    }
}

impl Layer for ProfileOverrides {
    fn layer(self, top: Self) -> Self {
        let extra_tools = match (self.extra_tools, top.extra_tools) {
            (Some(mut b), Some(t)) => {
                b.extend(t);
                Some(b)
            }
            (b, t) => t.or(b),
        };
        ProfileOverrides {
            name: top.name.or(self.name),
            description: top.description.or(self.description),
            model: top.model.or(self.model),
            temperature: top.temperature.or(self.temperature),
            max_tokens: top.max_tokens.or(self.max_tokens),
            memory: layer_nested(self.memory, top.memory),
            tools: top.tools.or(self.tools),
            extra_tools,
            style: layer_nested(self.style, top.style),
            runtime: layer_nested(self.runtime, top.runtime),
        }
    }
}

impl Layer for MemoryOverrides {
    fn layer(self, top: Self) -> Self {
        MemoryOverrides {
            approach: top.approach.or(self.approach),
            short_term_window: top.short_term_window.or(self.short_term_window),
            long_term_summary: top.long_term_summary.or(self.long_term_summary),
            summary_interval: top.summary_interval.or(self.summary_interval),
            persistence: layer_nested(self.persistence, top.persistence),
        }
    }
}

impl Layer for PersistenceOverrides {
    fn layer(self, top: Self) -> Self {
        PersistenceOverrides {
            enabled: top.enabled.or(self.enabled),
            store_type: top.store_type.or(self.store_type),
            store_location: top.store_location.or(self.store_location),
            namespaces: top.namespaces.or(self.namespaces),
        }
    }
}

impl Layer for StyleOverrides {
    fn layer(self, top: Self) -> Self {
        StyleOverrides {
            tone: top.tone.or(self.tone),
            voice: top.voice.or(self.voice),
            response_structure: top.response_structure.or(self.response_structure),
            use_file_block_syntax: top.use_file_block_syntax.or(self.use_file_block_syntax),
            markdown_files_four_backticks: top
                .markdown_files_four_backticks
                .or(self.markdown_files_four_backticks),
            include_commit_message_when_writing: top
                .include_commit_message_when_writing
                .or(self.include_commit_message_when_writing),
            never_store_secrets: top.never_store_secrets.or(self.never_store_secrets),
            image_policy: top.image_policy.or(self.image_policy),
            max_inline_code_lines: top.max_inline_code_lines.or(self.max_inline_code_lines),
        }
    }
}

impl Layer for RuntimeOverrides {
    fn layer(self, top: Self) -> Self {
        RuntimeOverrides {
            headed_by_default: top.headed_by_default.or(self.headed_by_default),
            config_file: top.config_file.or(self.config_file),
            workflow_doc: top.workflow_doc.or(self.workflow_doc),
            default_screenshots_dir: top.default_screenshots_dir.or(self.default_screenshots_dir),
            default_results_dir: top.default_results_dir.or(self.default_results_dir),
            default_logs_dir: top.default_logs_dir.or(self.default_logs_dir),
            xlsx_testcases_path: top.xlsx_testcases_path.or(self.xlsx_testcases_path),
            xlsx_results_sheet: top.xlsx_results_sheet.or(self.xlsx_results_sheet),
            timeout_ms: top.timeout_ms.or(self.timeout_ms),
        }
    }
}
