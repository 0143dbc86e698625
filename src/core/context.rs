//! Run context: merged configuration plus resolved input and output paths.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::config::{Config, load_config, load_config_file};
use crate::core::emit::{EmitOptions, render_template};

/// One configured language and the resource file it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInput {
    pub language: String,
    pub path: PathBuf,
}

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit config file, relative to the working directory.
    pub config: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub verbose: bool,
    pub show_output: bool,
}

/// Context shared by the generate and check commands.
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--output-dir gen`)
/// 2. `.strtabrc.json` config file
/// 3. Built-in defaults
pub struct GenerateContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory relative paths in the config are resolved against.
    pub base_dir: PathBuf,

    /// Languages in generation order, with resolved input paths.
    pub inputs: Vec<LanguageInput>,

    /// Directory generated files are written to.
    pub output_dir: PathBuf,

    /// Print each parsed entry.
    pub verbose: bool,

    /// Echo each generated file after writing it.
    pub show_output: bool,
}

impl GenerateContext {
    pub fn new(args: &Overrides) -> Result<Self> {
        let current_dir = env::current_dir().context("Failed to read current directory")?;
        let config_result = match &args.config {
            Some(path) => load_config_file(&current_dir.join(path))?,
            None => load_config(&current_dir)?,
        };

        if args.verbose && !config_result.from_file {
            eprintln!("Note: No .strtabrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref output_dir) = args.output_dir {
            // Relative to the working directory, not the config file
            config.output_dir = current_dir.join(output_dir).to_string_lossy().to_string();
        }
        config.verbose |= args.verbose;
        config.show_output |= args.show_output;

        Ok(Self::from_config(config, config_result.base_dir))
    }

    pub fn from_config(config: Config, base_dir: PathBuf) -> Self {
        let inputs = config
            .languages
            .iter()
            .map(|(language, path)| LanguageInput {
                language: language.clone(),
                path: resolve(&base_dir, path),
            })
            .collect();
        let output_dir = resolve(&base_dir, &config.output_dir);

        Self {
            verbose: config.verbose,
            show_output: config.show_output,
            config,
            base_dir,
            inputs,
            output_dir,
        }
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions::from_config(&self.config)
    }

    pub fn languages(&self) -> Vec<String> {
        self.inputs.iter().map(|i| i.language.clone()).collect()
    }

    pub fn header_path(&self) -> PathBuf {
        self.output_dir.join(&self.config.header_file_name)
    }

    pub fn source_path(&self, language: &str) -> PathBuf {
        self.output_dir
            .join(render_template(&self.config.source_file_name, language))
    }
}

fn resolve(base_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        let rel = path.strip_prefix(".").unwrap_or(path);
        base_dir.join(rel)
    }
}
