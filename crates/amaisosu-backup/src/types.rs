use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    File,
    Directory,
    AuxiliaryLoader,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::AuxiliaryLoader => "auxiliary-loader",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovedEntry {
    pub kind: EntryKind,
    pub source: PathBuf,
    pub target: PathBuf,
}

/// A move that a commit would perform. `target` is relative to the backup
/// directory, which does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMove {
    pub kind: EntryKind,
    pub source: PathBuf,
    pub target: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupReport {
    pub backup_dir: PathBuf,
    /// False when nothing was moved and the backup directory was removed again.
    pub kept: bool,
    pub moved: Vec<MovedEntry>,
}

impl BackupReport {
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }
}
