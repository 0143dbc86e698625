use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::emit::{LANG_PLACEHOLDER, render_template};

pub const CONFIG_FILE_NAME: &str = ".strtabrc.json";

/// End-of-line sequences the generated files may use.
pub const SUPPORTED_EOLS: &[&str] = &["\n", "\r\n"];

static C_IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Language identifier -> input `strings.xml`, in generation order.
    /// Relative paths are resolved against the config file's directory.
    pub languages: IndexMap<String, String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_header_file_name")]
    pub header_file_name: String,
    #[serde(default = "default_source_file_name")]
    pub source_file_name: String,
    #[serde(default = "default_header_prolog")]
    pub header_prolog: String,
    #[serde(default = "default_source_prolog")]
    pub source_prolog: String,
    #[serde(default = "default_eol")]
    pub eol: String,
    #[serde(default = "default_struct_type_name")]
    pub struct_type_name: String,
    #[serde(default = "default_instance_name")]
    pub instance_name: String,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub show_output: bool,
}

fn default_languages() -> IndexMap<String, String> {
    [
        ("En", "res/values/strings.xml"),
        ("Fr", "res/values-fr/strings.xml"),
    ]
    .into_iter()
    .map(|(lang, path)| (lang.to_string(), path.to_string()))
    .collect()
}

fn default_output_dir() -> String {
    "./".to_string()
}

fn default_header_file_name() -> String {
    "strings.h".to_string()
}

fn default_source_file_name() -> String {
    "strings_{lang}.c".to_string()
}

fn default_header_prolog() -> String {
    "// Generated by strtab. Do not edit.\n#pragma once\n\n".to_string()
}

fn default_source_prolog() -> String {
    "// Generated by strtab. Do not edit.\n#include \"{header}\"\n\n".to_string()
}

fn default_eol() -> String {
    "\n".to_string()
}

fn default_struct_type_name() -> String {
    "gui_strings_t".to_string()
}

fn default_instance_name() -> String {
    "gui_strings_{lang}".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            output_dir: default_output_dir(),
            header_file_name: default_header_file_name(),
            source_file_name: default_source_file_name(),
            header_prolog: default_header_prolog(),
            source_prolog: default_source_prolog(),
            eol: default_eol(),
            struct_type_name: default_struct_type_name(),
            instance_name: default_instance_name(),
            verbose: false,
            show_output: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects configurations that would generate colliding files or C that
    /// does not compile because of a bad type or instance name. Member names
    /// come from the resource files and are checked by the parser.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("No languages configured in 'languages'");
        }

        if !SUPPORTED_EOLS.contains(&self.eol.as_str()) {
            bail!("Unsupported 'eol' {:?}: expected \"\\n\" or \"\\r\\n\"", self.eol);
        }

        for (field, template) in [
            ("sourceFileName", &self.source_file_name),
            ("instanceName", &self.instance_name),
        ] {
            if !template.contains(LANG_PLACEHOLDER) {
                bail!(
                    "'{}' must contain the {} placeholder: \"{}\"",
                    field,
                    LANG_PLACEHOLDER,
                    template
                );
            }
        }

        if !is_c_identifier(&self.struct_type_name) {
            bail!(
                "'structTypeName' is not a valid C identifier: \"{}\"",
                self.struct_type_name
            );
        }

        for language in self.languages.keys() {
            let instance = render_template(&self.instance_name, language);
            if !is_c_identifier(&instance) {
                bail!(
                    "Instance name for language \"{}\" is not a valid C identifier: \"{}\"",
                    language,
                    instance
                );
            }
        }

        Ok(())
    }
}

pub fn is_c_identifier(name: &str) -> bool {
    C_IDENTIFIER_REGEX.is_match(name)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative input and output paths are resolved against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    let base_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok(ConfigLoadResult {
        config,
        base_dir,
        from_file: true,
    })
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
