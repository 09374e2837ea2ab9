//! Plain-mapping view of a profile for handing to the agent runtime bootstrap.

use serde_json::{Map, Value, json};

use super::types::{ConfigurationProfile, MemoryPolicy, RuntimeDefaults, StylePolicy};

impl ConfigurationProfile {
    /// Deep, owned snapshot of every field, keyed in declaration order.
    ///
    /// Nothing in the returned map borrows from or aliases the profile, so the
    /// caller may mutate it freely.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".into(), Value::from(self.name.as_str()));
        map.insert("description".into(), Value::from(self.description.as_str()));
        map.insert("model".into(), Value::from(self.model.as_str()));
        map.insert("temperature".into(), Value::from(self.temperature));
        map.insert("maxTokens".into(), Value::from(self.max_tokens));
        map.insert("memory".into(), memory_value(&self.memory));
        map.insert("tools".into(), Value::from(self.tools.to_vec()));
        map.insert("style".into(), style_value(&self.style));
        map.insert("runtime".into(), runtime_value(&self.runtime));
        map
    }
}

fn memory_value(m: &MemoryPolicy) -> Value {
    let p = &m.persistence;
    json!({
        "approach": m.approach.as_str(),
        "shortTermWindow": m.short_term_window,
        "longTermSummaryEnabled": m.long_term_summary_enabled,
        "summaryInterval": m.summary_interval,
        "persistence": {
            "enabled": p.enabled,
            "storeType": p.store_type.as_str(),
            "storeLocation": p.store_location,
            "namespaces": p.namespaces,
        }
    })
}

fn style_value(s: &StylePolicy) -> Value {
    let rules = &s.file_presentation_rules;
    json!({
        "tone": s.tone,
        "voice": s.voice,
        "responseStructure": s.response_structure,
        "filePresentationRules": {
            "useFileBlockSyntax": rules.use_file_block_syntax,
            "markdownFilesFourBackticks": rules.markdown_files_four_backticks,
            "includeCommitMessageWhenWriting": rules.include_commit_message_when_writing,
        },
        "safety": {
            "neverStoreSecrets": s.safety.never_store_secrets,
            "imagePolicy": s.safety.image_policy,
        },
        "maxInlineCodeLines": s.max_inline_code_lines,
    })
}

fn runtime_value(r: &RuntimeDefaults) -> Value {
    json!({
        "headedByDefault": r.headed_by_default,
        "configFile": r.config_file,
        "workflowDoc": r.workflow_doc,
        "defaultScreenshotsDir": r.default_screenshots_dir,
        "defaultResultsDir": r.default_results_dir,
        "defaultLogsDir": r.default_logs_dir,
        "xlsxTestcasesPath": r.xlsx_testcases_path,
        "xlsxResultsSheet": r.xlsx_results_sheet,
        "timeoutMs": r.timeout_ms,
    })
}
