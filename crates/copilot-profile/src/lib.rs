//! Agent profile for the Playwright MCP Copilot test-automation assistant.
//!
//! The profile is plain configuration: identity, model settings, memory
//! policy, permitted tool identifiers, response style and runtime defaults.
//! An external agent runtime consumes it through
//! [`ConfigurationProfile::to_mapping`]; nothing here talks to browsers,
//! spreadsheets or storage.

pub mod config;
pub mod logging;
pub mod parser;
pub mod profile;

pub use profile::{ConfigurationProfile, ProfileBuilder, ProfileError, ProfileOverrides};

/// Behavioral workflow document read by the agent runtime.
pub const WORKFLOW_DOC_PATH: &str = "agent/workflow.md";
