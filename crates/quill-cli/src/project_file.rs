//! JSON-file persistence for project generation state.
//!
//! Each project lives at `<data_dir>/projects/<name>.json`, next to its
//! `<name>.lock` write lock.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use quill_core::project::ProjectGenerationState;

#[derive(Debug, Clone)]
pub struct ProjectPaths {
    name: String,
    dir: PathBuf,
}

impl ProjectPaths {
    /// Paths for project `name` under `data_dir`.
    ///
    /// A blank name means no project is selected and yields `Ok(None)`.
    pub fn resolve(data_dir: &Path, name: &str) -> anyhow::Result<Option<Self>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        if !is_valid_name(name) {
            anyhow::bail!(
                "invalid project name '{name}': use letters, digits, '-', '_' or '.', not starting with '.'"
            );
        }
        Ok(Some(Self {
            name: name.to_string(),
            dir: data_dir.join("projects"),
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state_file(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.name))
    }

    pub fn lock_file(&self) -> PathBuf {
        self.dir.join(format!("{}.lock", self.name))
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Load a project's state, or a fresh state if it was never saved.
pub fn load(paths: &ProjectPaths) -> anyhow::Result<ProjectGenerationState> {
    let path = paths.state_file();
    if !path.exists() {
        return Ok(ProjectGenerationState::new(paths.name()));
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read project state at {}", path.display()))?;
    let mut state: ProjectGenerationState = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse project state at {}", path.display()))?;
    state.project_id = paths.name().to_string();
    Ok(state)
}

/// Write a project's state atomically (temp file + rename).
pub fn save(paths: &ProjectPaths, state: &ProjectGenerationState) -> anyhow::Result<()> {
    std::fs::create_dir_all(&paths.dir)
        .with_context(|| format!("failed to create {}", paths.dir.display()))?;
    let path = paths.state_file();
    let mut tmp = tempfile::NamedTempFile::new_in(&paths.dir)
        .context("failed to create temporary project file")?;
    serde_json::to_writer_pretty(&mut tmp, state)?;
    tmp.write_all(b"\n")?;
    tmp.persist(&path)
        .with_context(|| format!("failed to write project state to {}", path.display()))?;
    Ok(())
}
