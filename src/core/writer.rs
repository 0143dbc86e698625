use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// A generated file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Write `content` to `path` atomically.
///
/// The content goes to a temporary file next to `path` which then replaces
/// the target, so a failed run never leaves a partially written artifact.
/// The temporary file is removed on every error path.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    stage(path, content)?.commit()
}

/// Write every artifact.
///
/// All contents are staged to temporary files first. Targets are only
/// replaced once every artifact staged successfully, so a staging failure
/// leaves the previous set of files untouched.
pub fn write_artifacts(artifacts: &[Artifact]) -> Result<()> {
    let staged = artifacts
        .iter()
        .map(|artifact| stage(&artifact.path, &artifact.content))
        .collect::<Result<Vec<_>>>()?;

    for file in staged {
        file.commit()?;
    }
    Ok(())
}

/// Fully written and synced content waiting to replace its target.
struct StagedFile<'a> {
    file: NamedTempFile,
    target: &'a Path,
}

impl StagedFile<'_> {
    fn commit(self) -> Result<()> {
        let target = self.target;
        self.file.persist(target).map_err(|e| Error::Write {
            path: target.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }
}

fn stage<'a>(path: &'a Path, content: &str) -> Result<StagedFile<'a>> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;

    Ok(StagedFile { file, target: path })
}
