use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::manifest::{AUXILIARY_LOADER_DIR, AUXILIARY_LOADER_FILE, BACKUP_DIR_PREFIX};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn auxiliary_loader_path(&self) -> PathBuf {
        self.root
            .join(AUXILIARY_LOADER_DIR)
            .join(AUXILIARY_LOADER_FILE)
    }

    pub fn backup_dir_name(id: Uuid) -> String {
        format!("{BACKUP_DIR_PREFIX}{}", id.hyphenated())
    }

    pub fn backup_dir(&self, id: Uuid) -> PathBuf {
        self.root.join(Self::backup_dir_name(id))
    }

    /// Backup directories left behind by earlier commits, sorted by name.
    pub fn existing_backup_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&self.root)
            .with_context(|| format!("failed to read {}", self.root.display()))?
        {
            let entry = entry
                .with_context(|| format!("failed to read entry in {}", self.root.display()))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.starts_with(BACKUP_DIR_PREFIX) {
                continue;
            }
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}
