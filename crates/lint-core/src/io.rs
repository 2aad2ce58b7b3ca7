//! Atomic file writes with locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Write content atomically to a file, replacing whatever was there.
///
/// Content goes to a temp file in the same directory under an exclusive
/// advisory lock, then is renamed over the target. A symlinked target is
/// written through, and an existing file keeps its permissions.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let path = &resolve_symlink(path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::file_operation(parent, e))?;
    }

    let existing_permissions = fs::metadata(path).ok().map(|meta| meta.permissions());
    let temp_path = temp_path_for(path);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::file_operation(&temp_path, e))?;

    let written = temp_file
        .lock_exclusive()
        .and_then(|_| temp_file.write_all(content))
        .and_then(|_| temp_file.sync_all())
        .and_then(|_| match existing_permissions {
            Some(permissions) => temp_file.set_permissions(permissions),
            None => Ok(()),
        });
    // Lock is released on close.
    drop(temp_file);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::file_operation(&temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::file_operation(path, e));
    }

    Ok(())
}

/// Write UTF-8 text atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Follow a symlink at `path` to the file it points at, dangling or not.
fn resolve_symlink(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
    if !is_link {
        return path.to_path_buf();
    }
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    match fs::read_link(path) {
        Ok(target) => match path.parent() {
            Some(parent) => parent.join(target),
            None => target,
        },
        Err(_) => path.to_path_buf(),
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".eslintrc.json");

        write_text(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".eslintrc.json");
        fs::write(&path, "old content that is longer").unwrap();

        write_text(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tsconfig.eslint.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = write_text(&path, "{}").unwrap_err();
        assert!(matches!(err, Error::FileOperation { .. }), "got: {err:?}");

        let leftovers: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .flatten()
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_writes_through_symlink() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("shared.eslintrc.json");
        let link = tmp.path().join(".eslintrc.json");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_text(&link, "{}").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "{}");
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_creates_target() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("tsconfig.eslint.json");
        std::os::unix::fs::symlink("shared/tsconfig.json", &link).unwrap();

        write_text(&link, "{}").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(tmp.path().join("shared/tsconfig.json")).unwrap(),
            "{}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_mode_is_kept() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".overwrites.eslintrc.js");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_text(&path, "module.exports = {};").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
