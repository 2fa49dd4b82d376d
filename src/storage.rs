use crate::git_ops::GitOps;
use crate::guide::{CURRENT_FORMAT_VERSION, GuideData};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// TOML file persistence with optional Git synchronization
///
/// Every save writes the whole file; under Git sync each save is also
/// committed, and `shutdown` pushes the accumulated commits once.
pub struct Storage {
    file_path: PathBuf,
    git: Option<GitOps>,
}

impl Storage {
    /// Create a storage handle for the given data file
    pub fn new(file_path: impl AsRef<Path>, sync_git: bool) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let git = sync_git.then(|| GitOps::new(&file_path));
        Self { file_path, git }
    }

    /// Path of the data file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load guide data, starting empty when the file does not exist yet
    pub fn load(&self) -> Result<GuideData> {
        if let Some(ref git) = self.git {
            // Start from the remote's latest data when reachable
            if let Err(e) = git.pull() {
                log::warn!("Git pull failed, using local data: {}", e);
            }
        }

        if !self.file_path.exists() {
            return Ok(GuideData::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let data: GuideData = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;

        if data.format_version > CURRENT_FORMAT_VERSION {
            bail!(
                "Data file format version {} is newer than supported version {}",
                data.format_version,
                CURRENT_FORMAT_VERSION
            );
        }

        Ok(data)
    }

    /// Save with a default commit message
    pub fn save(&self, data: &GuideData) -> Result<()> {
        self.save_with_message(data, "Update guide data")
    }

    /// Save and, under Git sync, commit with the given message
    pub fn save_with_message(&self, data: &GuideData, message: &str) -> Result<()> {
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;

        if let Some(ref git) = self.git {
            git.commit(&self.file_path, message)
                .context("Failed to commit data file")?;
        }

        Ok(())
    }

    /// Push accumulated commits on shutdown
    pub fn shutdown(&self) -> Result<()> {
        if let Some(ref git) = self.git {
            git.push().context("Failed to push on shutdown")?;
        }
        Ok(())
    }
}
