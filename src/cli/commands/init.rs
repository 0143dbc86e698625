use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::cli::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary {
                config_file: CONFIG_FILE_NAME.to_string(),
                error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
            }),
            exit_status: ExitStatus::Failure,
        });
    }

    fs::write(config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            config_file: CONFIG_FILE_NAME.to_string(),
            error: None,
        }),
        exit_status: ExitStatus::Success,
    })
}
