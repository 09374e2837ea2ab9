//! Built-in profile defaults.

pub const NAME: &str = "Universal Web Testing Agent";

pub const DESCRIPTION: &str = "An expert Playwright + MCP coding and testing assistant for ANY web application. \
Provides Excel-driven data-driven tests and interactive exploratory testing. \
Adapts to any website configured in config/deployment.yaml. \
Reads/writes testcases.xlsx, captures screenshots, and produces structured test-results.";

pub const MODEL: &str = "claude-sonnet-4.5";
pub const TEMPERATURE: f64 = 0.08;
pub const MAX_TOKENS: u32 = 4096;

pub const SHORT_TERM_WINDOW: u32 = 8;
pub const SUMMARY_INTERVAL: u32 = 50;
pub const STORE_LOCATION: &str = "agent_memory/";

pub const TONE: &str = "concise professional conversational";
pub const VOICE: &str = "second-person for instructions, active voice";
pub const IMAGE_POLICY: &str = "no face identification or sensitive attribute inference";
pub const MAX_INLINE_CODE_LINES: u32 = 200;

pub const CONFIG_FILE: &str = "config/deployment.yaml";
pub const SCREENSHOTS_DIR: &str = "screenshots";
pub const RESULTS_DIR: &str = "test-results";
pub const LOGS_DIR: &str = "logs";
pub const XLSX_TESTCASES_PATH: &str = "test-scenarios/flight-test-scenarios.xlsx";
pub const XLSX_RESULTS_SHEET: &str = "Results";
/// Matches Playwright's own per-test default.
pub const TIMEOUT_MS: u64 = 30_000;

pub fn default_namespaces() -> Vec<String> {
    ["projects", "scenarios", "last_runs"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Tool identifiers the runtime is expected to map by name.
pub fn default_tools() -> Vec<String> {
    [
        // Git / GitHub
        "git_status",
        "git_commit",
        "git_push",
        "github_read",
        "github_write",
        "github_pr",
        // Files and workspace
        "file_read",
        "file_write",
        "file_list",
        "file_delete",
        // Playwright & MCP
        "playwright_test_run",
        "playwright_install_browsers",
        "mcp_browser_navigate",
        "mcp_browser_click",
        "mcp_browser_type",
        "mcp_browser_snapshot",
        "mcp_browser_screenshot",
        // Terminal
        "run_command",
        "run_npm_script",
        // Spreadsheets
        "xlsx_read",
        "xlsx_write",
        "csv_read",
        "csv_write",
        // Reporting & artifacts
        "save_screenshot",
        "save_report",
        "upload_artifact",
        // Utilities
        "search_codebase",
        "open_file",
        "edit_file",
        "run_linter",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn default_response_structure() -> Vec<String> {
    [
        "1. Short summary of what I will/do",
        "2. Actionable steps or file contents (copy-pasteable)",
        "3. One-line verification commands",
        "4. Final single-paragraph narration of progress & next step",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
