use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta::Settings;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;

const BIN_NAME: &str = "strtab";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// A project with a config listing `languages` and one resource file each.
    pub fn with_languages(languages: &[(&str, &str)]) -> Result<Self> {
        let test = Self::new()?;
        let mut entries = Vec::new();
        for (language, xml) in languages {
            let path = format!("res/values-{}/strings.xml", language);
            test.write_file(&path, xml)?;
            entries.push(format!("\"{}\": \"{}\"", language, path));
        }
        test.write_file(
            ".strtabrc.json",
            &format!(
                "{{ \"languages\": {{ {} }}, \"outputDir\": \"gen\" }}",
                entries.join(", ")
            ),
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("generate");
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    /// Snapshot settings that replace the temporary project path with `[PROJECT]`.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::clone_current();
        settings.add_filter(
            &regex::escape(&self.project_dir.to_string_lossy()),
            "[PROJECT]",
        );
        settings
    }

    pub fn init_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("init");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
