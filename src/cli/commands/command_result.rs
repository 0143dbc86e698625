use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::Artifact;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

/// Per-language entry counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: String,
    pub scalar_count: usize,
    pub array_count: usize,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub languages: Vec<LanguageStats>,
    pub member_count: usize,
    /// Paths are displayed relative to this directory.
    pub base_dir: PathBuf,
    pub artifacts: Vec<Artifact>,
    /// Echo every artifact's content.
    pub show_output: bool,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub languages: Vec<LanguageStats>,
    pub member_count: usize,
    pub verbose: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_file: String,
    /// Set when the config file already existed and nothing was written.
    pub error: Option<String>,
}

/// Result of running strtab commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
