use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, generate::language_stats};
use crate::cli::ExitStatus;
use crate::cli::args::CheckCommand;
use crate::core::{GenerateContext, Overrides, reconcile};

/// Run pass one only: parse and reconcile every language, write nothing.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = GenerateContext::new(&Overrides::from(&cmd.common))?;
    let reconciled = reconcile(&ctx.inputs, ctx.verbose)?;

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            languages: language_stats(&reconciled),
            member_count: reconciled.schema.len(),
            verbose: ctx.verbose,
        }),
        exit_status: ExitStatus::Success,
    })
}
