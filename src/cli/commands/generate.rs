use anyhow::Result;

use super::{CommandResult, CommandSummary, GenerateSummary, LanguageStats};
use crate::cli::ExitStatus;
use crate::cli::args::GenerateCommand;
use crate::core::{GenerateContext, Overrides, Reconciled, generate as run_generation};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let ctx = GenerateContext::new(&Overrides::from(&cmd.common))?;
    let generation = run_generation(&ctx)?;

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            languages: language_stats(&generation.reconciled),
            member_count: generation.reconciled.schema.len(),
            base_dir: ctx.base_dir.clone(),
            artifacts: generation.artifacts,
            show_output: ctx.show_output,
        }),
        exit_status: ExitStatus::Success,
    })
}

pub(crate) fn language_stats(reconciled: &Reconciled) -> Vec<LanguageStats> {
    reconciled
        .tables
        .iter()
        .map(|table| LanguageStats {
            language: table.language.clone(),
            scalar_count: table.scalar_count(),
            array_count: table.array_count(),
        })
        .collect()
}
