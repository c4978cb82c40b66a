use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

#[cfg(unix)]
const EXDEV: i32 = 18;
#[cfg(windows)]
const ERROR_NOT_SAME_DEVICE: i32 = 17;

/// Only a rename across filesystems may fall back to copy+delete. Any other
/// rename failure leaves both source and destination as they were.
pub fn is_cross_device(err: &io::Error) -> bool {
    #[cfg(unix)]
    {
        err.raw_os_error() == Some(EXDEV)
    }
    #[cfg(windows)]
    {
        err.raw_os_error() == Some(ERROR_NOT_SAME_DEVICE)
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = err;
        false
    }
}

pub fn move_file(src: &Path, dst: &Path) -> Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(err) if is_cross_device(&err) => {
            fs::copy(src, dst).with_context(|| {
                format!("failed to copy {} to {}", src.display(), dst.display())
            })?;
            fs::remove_file(src)
                .with_context(|| format!("failed to remove moved file {}", src.display()))?;
            Ok(())
        }
        Err(err) => Err(err).with_context(|| {
            format!("failed to move {} to {}", src.display(), dst.display())
        }),
    }
}

pub fn move_dir_or_copy(src: &Path, dst: &Path) -> Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(err) if is_cross_device(&err) => {
            copy_dir_recursive(src, dst)?;
            fs::remove_dir_all(src)
                .with_context(|| format!("failed to remove moved directory {}", src.display()))?;
            Ok(())
        }
        Err(err) => Err(err).with_context(|| {
            format!("failed to move {} to {}", src.display(), dst.display())
        }),
    }
}

/// Recreates `src` at `dst`, which must not exist yet.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    let entries =
        fs::read_dir(src).with_context(|| format!("failed to read {}", src.display()))?;
    fs::create_dir(dst).with_context(|| format!("failed to create {}", dst.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", src.display()))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", from.display()))?;

        if file_type.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else if file_type.is_symlink() {
            copy_symlink(&from, &to)?;
        } else {
            fs::copy(&from, &to).with_context(|| {
                format!("failed to copy {} to {}", from.display(), to.display())
            })?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    let target =
        fs::read_link(from).with_context(|| format!("failed to read symlink {}", from.display()))?;
    std::os::unix::fs::symlink(&target, to).with_context(|| {
        format!("failed to create symlink {} -> {}", to.display(), target.display())
    })
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .with_context(|| format!("failed to copy {} to {}", from.display(), to.display()))
}

/// Looks at immediate children only.
pub fn dir_is_empty(dir: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    Ok(entries.next().is_none())
}

pub fn remove_dir_if_empty(dir: &Path) -> Result<bool> {
    if !dir_is_empty(dir)? {
        return Ok(false);
    }
    fs::remove_dir(dir).with_context(|| format!("failed to remove {}", dir.display()))?;
    Ok(true)
}
