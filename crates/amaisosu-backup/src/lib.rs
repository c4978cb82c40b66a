mod backup;
mod fs_utils;
mod layout;
mod manifest;
mod types;

pub use backup::Backup;
pub use layout::InstallLayout;
pub use manifest::{
    AUXILIARY_LOADER_DIR, AUXILIARY_LOADER_FILE, BACKUP_DIR_PREFIX, KNOWN_DIRECTORIES,
    KNOWN_FILES,
};
pub use types::{BackupReport, EntryKind, MovedEntry, PlannedMove};
