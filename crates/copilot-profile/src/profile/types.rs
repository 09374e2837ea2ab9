use std::fmt;

use super::default;
use super::tools::ToolSet;

/// Memory strategy tag. Unknown tags are carried through for the runtime to judge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MemoryApproach {
    /// Short-term window plus rolling long-term summary.
    #[default]
    Hybrid,
    Other(String),
}

impl MemoryApproach {
    pub fn as_str(&self) -> &str {
        match self {
            MemoryApproach::Hybrid => "hybrid",
            MemoryApproach::Other(s) => s,
        }
    }
}

impl From<&str> for MemoryApproach {
    fn from(s: &str) -> Self {
        match s {
            "hybrid" => MemoryApproach::Hybrid,
            other => MemoryApproach::Other(other.to_string()),
        }
    }
}

/// Backend tag for long-term memory persistence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreType {
    #[default]
    File,
    Database,
    VectorDb,
    Other(String),
}

impl StoreType {
    pub fn as_str(&self) -> &str {
        match self {
            StoreType::File => "file",
            StoreType::Database => "database",
            StoreType::VectorDb => "vector_db",
            StoreType::Other(s) => s,
        }
    }
}

impl From<&str> for StoreType {
    fn from(s: &str) -> Self {
        match s {
            "file" => StoreType::File,
            "database" => StoreType::Database,
            "vector_db" => StoreType::VectorDb,
            other => StoreType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MemoryApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPolicy {
    pub approach: MemoryApproach,
    /// Recent messages retained verbatim.
    pub short_term_window: u32,
    pub long_term_summary_enabled: bool,
    /// Messages between long-term summary refreshes.
    pub summary_interval: u32,
    pub persistence: PersistencePolicy,
}

impl Default for MemoryPolicy {
    fn default() -> Self {
        Self {
            approach: MemoryApproach::Hybrid,
            short_term_window: default::SHORT_TERM_WINDOW,
            long_term_summary_enabled: true,
            summary_interval: default::SUMMARY_INTERVAL,
            persistence: PersistencePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersistencePolicy {
    pub enabled: bool,
    pub store_type: StoreType,
    /// Relative path or connection string; opaque to this crate.
    pub store_location: String,
    pub namespaces: Vec<String>,
}

impl Default for PersistencePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            store_type: StoreType::File,
            store_location: default::STORE_LOCATION.to_string(),
            namespaces: default::default_namespaces(),
        }
    }
}

/// Response formatting and behavior policy.
#[derive(Debug, Clone, PartialEq)]
pub struct StylePolicy {
    pub tone: String,
    pub voice: String,
    pub response_structure: Vec<String>,
    pub file_presentation_rules: FilePresentationRules,
    pub safety: SafetyPolicy,
    pub max_inline_code_lines: u32,
}

impl Default for StylePolicy {
    fn default() -> Self {
        Self {
            tone: default::TONE.to_string(),
            voice: default::VOICE.to_string(),
            response_structure: default::default_response_structure(),
            file_presentation_rules: FilePresentationRules::default(),
            safety: SafetyPolicy::default(),
            max_inline_code_lines: default::MAX_INLINE_CODE_LINES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePresentationRules {
    pub use_file_block_syntax: bool,
    pub markdown_files_four_backticks: bool,
    pub include_commit_message_when_writing: bool,
}

impl Default for FilePresentationRules {
    fn default() -> Self {
        Self {
            use_file_block_syntax: true,
            markdown_files_four_backticks: true,
            include_commit_message_when_writing: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyPolicy {
    pub never_store_secrets: bool,
    pub image_policy: String,
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self {
            never_store_secrets: true,
            image_policy: default::IMAGE_POLICY.to_string(),
        }
    }
}

/// Execution defaults handed to the runtime. Paths are opaque strings and are
/// never touched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeDefaults {
    /// Headed Playwright runs during development.
    pub headed_by_default: bool,
    /// Deployment target settings.
    pub config_file: String,
    pub workflow_doc: String,
    pub default_screenshots_dir: String,
    pub default_results_dir: String,
    pub default_logs_dir: String,
    pub xlsx_testcases_path: String,
    /// Sheet written back with execution results.
    pub xlsx_results_sheet: String,
    pub timeout_ms: u64,
}

impl Default for RuntimeDefaults {
    fn default() -> Self {
        Self {
            headed_by_default: true,
            config_file: default::CONFIG_FILE.to_string(),
            workflow_doc: crate::WORKFLOW_DOC_PATH.to_string(),
            default_screenshots_dir: default::SCREENSHOTS_DIR.to_string(),
            default_results_dir: default::RESULTS_DIR.to_string(),
            default_logs_dir: default::LOGS_DIR.to_string(),
            xlsx_testcases_path: default::XLSX_TESTCASES_PATH.to_string(),
            xlsx_results_sheet: default::XLSX_RESULTS_SHEET.to_string(),
            timeout_ms: default::TIMEOUT_MS,
        }
    }
}

/// Immutable agent profile. Built through [`ProfileBuilder`](super::ProfileBuilder),
/// which enforces the field constraints; there is no way to mutate a built
/// profile, only to derive a new one via [`ConfigurationProfile::to_builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationProfile {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) model: String,
    pub(crate) temperature: f64,
    pub(crate) max_tokens: u32,
    pub(crate) memory: MemoryPolicy,
    pub(crate) tools: ToolSet,
    pub(crate) style: StylePolicy,
    pub(crate) runtime: RuntimeDefaults,
}

impl Default for ConfigurationProfile {
    fn default() -> Self {
        Self {
            name: default::NAME.to_string(),
            description: default::DESCRIPTION.to_string(),
            model: default::MODEL.to_string(),
            temperature: default::TEMPERATURE,
            max_tokens: default::MAX_TOKENS,
            memory: MemoryPolicy::default(),
            tools: default::default_tools().into_iter().collect(),
            style: StylePolicy::default(),
            runtime: RuntimeDefaults::default(),
        }
    }
}

impl ConfigurationProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Downstream language-model backend id.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn memory(&self) -> &MemoryPolicy {
        &self.memory
    }

    pub fn tools(&self) -> &ToolSet {
        &self.tools
    }

    pub fn style(&self) -> &StylePolicy {
        &self.style
    }

    pub fn runtime(&self) -> &RuntimeDefaults {
        &self.runtime
    }
}
