//! Profile construction with per-field overrides and validation.

use super::error::ProfileError;
use super::overrides::ProfileOverrides;
use super::tools::ToolSet;
use super::types::{
    ConfigurationProfile, MemoryApproach, MemoryPolicy, RuntimeDefaults, StoreType, StylePolicy,
};

/// Collects overrides on top of the defaults; `build` validates and freezes them.
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    draft: ConfigurationProfile,
}

impl ConfigurationProfile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Copy-on-write entry point: a builder seeded with this profile's values.
    pub fn to_builder(&self) -> ProfileBuilder {
        ProfileBuilder {
            draft: self.clone(),
        }
    }
}

impl ProfileBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = description.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.draft.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.draft.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.draft.max_tokens = max_tokens;
        self
    }

    pub fn memory(mut self, memory: MemoryPolicy) -> Self {
        self.draft.memory = memory;
        self
    }

    /// Replaces the tool list; duplicates collapse onto their first occurrence.
    pub fn tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.tools = tools.into_iter().collect();
        self
    }

    pub fn add_tool(mut self, tool: impl Into<String>) -> Self {
        self.draft.tools.insert(tool);
        self
    }

    pub fn style(mut self, style: StylePolicy) -> Self {
        self.draft.style = style;
        self
    }

    pub fn runtime(mut self, runtime: RuntimeDefaults) -> Self {
        self.draft.runtime = runtime;
        self
    }

    /// Copies every set field of `o` onto the draft.
    pub fn apply(mut self, o: &ProfileOverrides) -> Self {
        let d = &mut self.draft;
        set(&mut d.name, &o.name);
        set(&mut d.description, &o.description);
        set(&mut d.model, &o.model);
        set(&mut d.temperature, &o.temperature);
        set(&mut d.max_tokens, &o.max_tokens);

        if let Some(m) = &o.memory {
            if let Some(a) = &m.approach {
                d.memory.approach = MemoryApproach::from(a.as_str());
            }
            set(&mut d.memory.short_term_window, &m.short_term_window);
            set(&mut d.memory.long_term_summary_enabled, &m.long_term_summary);
            set(&mut d.memory.summary_interval, &m.summary_interval);
            if let Some(p) = &m.persistence {
                let dp = &mut d.memory.persistence;
                set(&mut dp.enabled, &p.enabled);
                if let Some(t) = &p.store_type {
                    dp.store_type = StoreType::from(t.as_str());
                }
                set(&mut dp.store_location, &p.store_location);
                set(&mut dp.namespaces, &p.namespaces);
            }
        }

        if let Some(tools) = &o.tools {
            d.tools = tools.iter().cloned().collect::<ToolSet>();
        }
        if let Some(extra) = &o.extra_tools {
            d.tools.extend(extra.iter().cloned());
        }

        if let Some(s) = &o.style {
            let ds = &mut d.style;
            set(&mut ds.tone, &s.tone);
            set(&mut ds.voice, &s.voice);
            set(&mut ds.response_structure, &s.response_structure);
            set(
                &mut ds.file_presentation_rules.use_file_block_syntax,
                &s.use_file_block_syntax,
            );
            set(
                &mut ds.file_presentation_rules.markdown_files_four_backticks,
                &s.markdown_files_four_backticks,
            );
            set(
                &mut ds.file_presentation_rules.include_commit_message_when_writing,
                &s.include_commit_message_when_writing,
            );
            set(&mut ds.safety.never_store_secrets, &s.never_store_secrets);
            set(&mut ds.safety.image_policy, &s.image_policy);
            set(&mut ds.max_inline_code_lines, &s.max_inline_code_lines);
        }

        if let Some(r) = &o.runtime {
            let dr = &mut d.runtime;
            set(&mut dr.headed_by_default, &r.headed_by_default);
            set(&mut dr.config_file, &r.config_file);
            set(&mut dr.workflow_doc, &r.workflow_doc);
            set(&mut dr.default_screenshots_dir, &r.default_screenshots_dir);
            set(&mut dr.default_results_dir, &r.default_results_dir);
            set(&mut dr.default_logs_dir, &r.default_logs_dir);
            set(&mut dr.xlsx_testcases_path, &r.xlsx_testcases_path);
            set(&mut dr.xlsx_results_sheet, &r.xlsx_results_sheet);
            set(&mut dr.timeout_ms, &r.timeout_ms);
        }
        self
    }

    pub fn build(self) -> Result<ConfigurationProfile, ProfileError> {
        validate(&self.draft)?;
        tracing::debug!(
            "built profile '{}' (model={}, tools={})",
            self.draft.name,
            self.draft.model,
            self.draft.tools.len()
        );
        Ok(self.draft)
    }
}

fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ProfileError> {
    if value.trim().is_empty() {
        return Err(ProfileError::invalid(field, "must not be empty", format!("{value:?}")));
    }
    Ok(())
}

fn positive<T: Into<u64> + Copy>(field: &'static str, value: T) -> Result<(), ProfileError> {
    if value.into() == 0 {
        return Err(ProfileError::invalid(field, "must be a positive integer", 0));
    }
    Ok(())
}

fn validate(p: &ConfigurationProfile) -> Result<(), ProfileError> {
    if !p.temperature.is_finite() || p.temperature < 0.0 {
        return Err(ProfileError::invalid(
            "temperature",
            "must be a finite, non-negative number",
            p.temperature,
        ));
    }
    positive("maxTokens", p.max_tokens)?;

    let m = &p.memory;
    positive("memory.shortTermWindow", m.short_term_window)?;
    positive("memory.summaryInterval", m.summary_interval)?;
    non_empty(
        "memory.persistence.storeLocation",
        &m.persistence.store_location,
    )?;
    for ns in &m.persistence.namespaces {
        non_empty("memory.persistence.namespaces", ns)?;
    }

    for tool in p.tools.iter() {
        non_empty("tools", tool)?;
    }

    positive("style.maxInlineCodeLines", p.style.max_inline_code_lines)?;

    let r = &p.runtime;
    non_empty("runtime.configFile", &r.config_file)?;
    non_empty("runtime.workflowDoc", &r.workflow_doc)?;
    non_empty("runtime.defaultScreenshotsDir", &r.default_screenshots_dir)?;
    non_empty("runtime.defaultResultsDir", &r.default_results_dir)?;
    non_empty("runtime.defaultLogsDir", &r.default_logs_dir)?;
    non_empty("runtime.xlsxTestcasesPath", &r.xlsx_testcases_path)?;
    non_empty("runtime.xlsxResultsSheet", &r.xlsx_results_sheet)?;
    positive("runtime.timeoutMs", r.timeout_ms)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::overrides::{MemoryOverrides, PersistenceOverrides, RuntimeOverrides};

    #[test]
    fn defaults_always_build() {
        let built = ConfigurationProfile::builder().build().expect("defaults valid");
        assert_eq!(built, ConfigurationProfile::default());
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let err = ConfigurationProfile::builder()
            .max_tokens(0)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "maxTokens");
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn negative_temperature_is_rejected() {
        let err = ConfigurationProfile::builder()
            .temperature(-0.1)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "temperature");
        assert!(err.to_string().contains("-0.1"));
    }

    #[test]
    fn non_finite_temperature_is_rejected() {
        let err = ConfigurationProfile::builder()
            .temperature(f64::NAN)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "temperature");
    }

    #[test]
    fn temperature_above_one_passes_through() {
        let p = ConfigurationProfile::builder()
            .temperature(1.4)
            .build()
            .expect("only the lower bound is enforced");
        assert_eq!(p.temperature(), 1.4);
    }

    #[test]
    fn empty_paths_are_rejected() {
        let runtime = RuntimeDefaults {
            default_screenshots_dir: "  ".into(),
            ..Default::default()
        };
        let err = ConfigurationProfile::builder()
            .runtime(runtime)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "runtime.defaultScreenshotsDir");
    }

    #[test]
    fn zero_window_reports_nested_field() {
        let overrides = ProfileOverrides {
            memory: Some(MemoryOverrides {
                short_term_window: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = ConfigurationProfile::builder()
            .apply(&overrides)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "memory.shortTermWindow");
    }

    #[test]
    fn identity_and_tags_are_not_validated() {
        let p = ConfigurationProfile::builder()
            .name("")
            .model("")
            .memory(MemoryPolicy {
                approach: MemoryApproach::Other(String::new()),
                ..Default::default()
            })
            .build()
            .expect("identity strings and tags pass through");
        assert_eq!(p.name(), "");
        assert_eq!(p.model(), "");
        assert_eq!(p.memory().approach.as_str(), "");

        let overrides = ProfileOverrides {
            memory: Some(MemoryOverrides {
                persistence: Some(PersistenceOverrides {
                    store_type: Some(String::new()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let p = ConfigurationProfile::builder()
            .apply(&overrides)
            .build()
            .expect("store type is the runtime's concern");
        assert_eq!(p.memory().persistence.store_type, StoreType::Other(String::new()));
    }

    #[test]
    fn blank_tool_is_rejected() {
        let err = ConfigurationProfile::builder()
            .add_tool("")
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "tools");
    }

    #[test]
    fn duplicate_tools_are_deduplicated() {
        let p = ConfigurationProfile::builder()
            .tools(["xlsx_read", "xlsx_read", "run_command"])
            .add_tool("run_command")
            .build()
            .expect("valid");
        assert_eq!(p.tools().to_vec(), vec!["xlsx_read", "run_command"]);
    }

    #[test]
    fn apply_overrides_nested_fields() {
        let overrides = ProfileOverrides {
            model: Some("gpt-5".into()),
            extra_tools: Some(vec!["lighthouse_audit".into(), "git_status".into()]),
            memory: Some(MemoryOverrides {
                approach: Some("sliding_window".into()),
                persistence: Some(PersistenceOverrides {
                    store_type: Some("vector_db".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            runtime: Some(RuntimeOverrides {
                headed_by_default: Some(false),
                timeout_ms: Some(60_000),
                ..Default::default()
            }),
            ..Default::default()
        };
        let p = ConfigurationProfile::builder()
            .apply(&overrides)
            .build()
            .expect("valid");
        assert_eq!(p.model(), "gpt-5");
        assert_eq!(
            p.memory().approach,
            MemoryApproach::Other("sliding_window".into())
        );
        assert_eq!(p.memory().persistence.store_type, StoreType::VectorDb);
        assert_eq!(p.memory().persistence.store_location, "agent_memory/");
        assert!(!p.runtime().headed_by_default);
        assert_eq!(p.runtime().timeout_ms, 60_000);
        assert_eq!(p.tools().len(), 31);
        assert!(p.tools().contains("lighthouse_audit"));
    }

    #[test]
    fn to_builder_leaves_original_untouched() {
        let original = ConfigurationProfile::default();
        let derived = original
            .to_builder()
            .model("gpt-4.1")
            .build()
            .expect("valid");
        assert_eq!(original.model(), "claude-sonnet-4.5");
        assert_eq!(derived.model(), "gpt-4.1");
        assert_eq!(derived.tools(), original.tools());
    }
}
