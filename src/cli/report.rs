//! Report formatting and printing utilities.
//!
//! Separate from core logic so strtab can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, GenerateSummary, InitSummary, LanguageStats,
};
use crate::core::Artifact;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Generate(summary) => {
            print_generate_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Check(summary) => {
            print_check_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print the generate summary to a custom writer.
pub fn print_generate_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    for artifact in &summary.artifacts {
        let path = display_path(&artifact.path, &summary.base_dir);
        if summary.show_output {
            print_artifact(artifact, &path, writer);
        } else {
            let _ = writeln!(writer, "  {} {}", "wrote".dimmed(), path);
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} {} for {} ({})",
            summary.artifacts.len(),
            plural(summary.artifacts.len(), "file", "files"),
            count_languages(summary.languages.len()),
            count_members(summary.member_count)
        )
        .green()
    );
}

/// Print the check summary to a custom writer.
pub fn print_check_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    if summary.verbose {
        for stats in &summary.languages {
            print_language_stats(stats, writer);
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - {}, no schema conflicts",
            count_languages(summary.languages.len()),
            count_members(summary.member_count)
        )
        .green()
    );
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("{} {}", "Error:".bold().red(), error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.config_file).green()
        ),
    }
}

fn print_artifact<W: Write>(artifact: &Artifact, path: &str, writer: &mut W) {
    let _ = writeln!(writer, "Source File Created '{}':", path);
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", artifact.content.magenta());
}

fn print_language_stats<W: Write>(stats: &LanguageStats, writer: &mut W) {
    let _ = writeln!(
        writer,
        "  {}: {} {}, {} {}",
        stats.language.bold(),
        stats.scalar_count,
        plural(stats.scalar_count, "string", "strings"),
        stats.array_count,
        plural(stats.array_count, "array", "arrays")
    );
}

fn display_path(path: &Path, base_dir: &Path) -> String {
    path.strip_prefix(base_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn count_languages(count: usize) -> String {
    format!("{} {}", count, plural(count, "language", "languages"))
}

fn count_members(count: usize) -> String {
    format!("{} {}", count, plural(count, "member", "members"))
}
