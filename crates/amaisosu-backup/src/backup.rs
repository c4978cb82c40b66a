use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::fs_utils::{move_dir_or_copy, move_file, remove_dir_if_empty};
use crate::layout::InstallLayout;
use crate::manifest::{AUXILIARY_LOADER_FILE, KNOWN_DIRECTORIES, KNOWN_FILES};
use crate::types::{BackupReport, EntryKind, MovedEntry, PlannedMove};

/// Moves an existing OpenSauce and HAC2 installation out of the way into
/// `AmaiSosu.Backup.<uuid>` under the installation root. The backup directory
/// is removed again when nothing was moved into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    layout: InstallLayout,
}

impl Backup {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            layout: InstallLayout::new(path),
        }
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    pub fn commit(&self) -> Result<()> {
        self.commit_with_report().map(|_| ())
    }

    pub fn commit_with_report(&self) -> Result<BackupReport> {
        let backup_dir = self.layout.backup_dir(Uuid::new_v4());
        self.commit_to(&backup_dir)
    }

    /// Present entries a commit would move right now, in commit order.
    /// Targets are relative to the backup directory.
    pub fn plan(&self) -> Vec<PlannedMove> {
        self.steps()
            .into_iter()
            .filter(|step| source_present(step.kind, &step.source))
            .collect()
    }

    pub(crate) fn commit_to(&self, backup_dir: &Path) -> Result<BackupReport> {
        fs::create_dir(backup_dir).with_context(|| {
            format!("failed to create backup directory {}", backup_dir.display())
        })?;
        info!(backup_dir = %backup_dir.display(), "created backup directory");

        let moved = self.move_manifest_into(backup_dir)?;

        let removed = remove_dir_if_empty(backup_dir)?;
        if removed {
            info!(
                backup_dir = %backup_dir.display(),
                "nothing to back up, removed backup directory"
            );
        } else {
            info!(
                backup_dir = %backup_dir.display(),
                entries = moved.len(),
                "kept backup directory"
            );
        }

        Ok(BackupReport {
            backup_dir: backup_dir.to_path_buf(),
            kept: !removed,
            moved,
        })
    }

    /// Moves every present manifest entry into `backup_dir`, stopping at the
    /// first failure. Entries moved before the failure stay moved.
    pub(crate) fn move_manifest_into(&self, backup_dir: &Path) -> Result<Vec<MovedEntry>> {
        // Presence is checked right before each move; a source removed by a
        // concurrent commit is skipped like one that never existed.
        let mut moved = Vec::new();
        for step in self.steps() {
            if !source_present(step.kind, &step.source) {
                continue;
            }

            let target = backup_dir.join(&step.target);
            match step.kind {
                EntryKind::File | EntryKind::AuxiliaryLoader => move_file(&step.source, &target)?,
                EntryKind::Directory => move_dir_or_copy(&step.source, &target)?,
            }
            debug!(
                kind = step.kind.as_str(),
                source = %step.source.display(),
                target = %target.display(),
                "moved entry into backup"
            );
            moved.push(MovedEntry {
                kind: step.kind,
                source: step.source,
                target,
            });
        }
        Ok(moved)
    }

    fn steps(&self) -> Vec<PlannedMove> {
        let files = KNOWN_FILES.iter().map(|name| PlannedMove {
            kind: EntryKind::File,
            source: self.layout.entry_path(name),
            target: PathBuf::from(name),
        });
        let directories = KNOWN_DIRECTORIES.iter().map(|name| PlannedMove {
            kind: EntryKind::Directory,
            source: self.layout.entry_path(name),
            target: PathBuf::from(name),
        });
        let loader = std::iter::once(PlannedMove {
            kind: EntryKind::AuxiliaryLoader,
            source: self.layout.auxiliary_loader_path(),
            target: PathBuf::from(AUXILIARY_LOADER_FILE),
        });

        files.chain(directories).chain(loader).collect()
    }
}

fn source_present(kind: EntryKind, path: &Path) -> bool {
    match kind {
        EntryKind::File | EntryKind::AuxiliaryLoader => path.is_file(),
        EntryKind::Directory => path.is_dir(),
    }
}
