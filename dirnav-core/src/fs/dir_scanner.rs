//! ``src/fs/dir_scanner.rs``
//!
//! # `Directory Lister`: Filesystem Access for the Browser
//!
//! Everything the browser asks of the filesystem goes through
//! [`DirectoryLister`], so the navigation logic can be driven by an
//! in-memory listing in tests. [`OsLister`] is the real implementation.
//!
//! Listings are returned in the order the OS yields them, after a synthetic
//! `..` entry that always comes first. No sorting is applied.

use crate::error::AppError;
use crate::fs::dir_entry::{DirectoryEntry, EntryKind, PARENT_NAME, is_normal_entry};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

pub trait DirectoryLister {
    /// Normal entries of `path`, `..` first.
    fn list(&self, path: &Path, show_hidden: bool) -> Result<Vec<DirectoryEntry>, AppError>;

    /// Make `path` the working directory. Returns the resolved new
    /// directory.
    fn change_directory(&self, path: &Path) -> Result<PathBuf, AppError>;

    /// Remove one filesystem object. Directories must be empty.
    fn remove(&self, path: &Path, kind: EntryKind) -> Result<(), AppError>;

    /// Whether `path` can be opened for listing.
    fn readable(&self, path: &Path) -> bool;
}

/// Lister backed by `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct OsLister {
    /// Also move the process working directory on `change_directory`.
    follow_process_cwd: bool,
}

impl OsLister {
    pub const fn new() -> Self {
        Self {
            follow_process_cwd: true,
        }
    }

    /// A lister that leaves the process working directory alone.
    pub const fn detached() -> Self {
        Self {
            follow_process_cwd: false,
        }
    }
}

impl Default for OsLister {
    fn default() -> Self {
        Self::new()
    }
}

/// Size the way `stat` reports it (symlinks followed), 0 when unreadable.
fn entry_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Canonical form of `path`. A `..` whose directory was removed from under
/// the browser resolves to the nearest ancestor that still exists.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    let err = match fs::canonicalize(path) {
        Ok(target) => return Ok(target),
        Err(e) => e,
    };

    let is_parent_link = matches!(path.components().next_back(), Some(Component::ParentDir));
    if err.kind() != io::ErrorKind::NotFound || !is_parent_link {
        return Err(err);
    }

    let vanished = path.parent().unwrap_or(path);
    vanished
        .ancestors()
        .skip(1)
        .find_map(|ancestor| fs::canonicalize(ancestor).ok())
        .inspect(|found| {
            warn!(
                "{} is gone, falling back to {}",
                vanished.display(),
                found.display()
            )
        })
        .ok_or(err)
}

impl DirectoryLister for OsLister {
    fn list(&self, path: &Path, show_hidden: bool) -> Result<Vec<DirectoryEntry>, AppError> {
        let read_dir = fs::read_dir(path).map_err(|e| AppError::listing_unavailable(path, e))?;

        let mut entries = vec![DirectoryEntry::parent(entry_size(&path.join(PARENT_NAME)))];

        for entry in read_dir {
            let entry = entry.map_err(|e| AppError::listing_unavailable(path, e))?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();

            if !is_normal_entry(&name, show_hidden) {
                continue;
            }

            let kind = match entry.file_type() {
                Ok(file_type) => EntryKind::from_std(file_type),
                Err(e) => {
                    debug!("No file type for {:?}: {}", entry.path(), e);
                    EntryKind::Other
                }
            };

            entries.push(DirectoryEntry::new(
                &*name,
                kind,
                entry_size(&entry.path()),
            ));
        }

        Ok(entries)
    }

    fn change_directory(&self, path: &Path) -> Result<PathBuf, AppError> {
        let target = resolve(path).map_err(|e| AppError::navigation_failed(path, &e))?;

        if !target.is_dir() {
            return Err(AppError::NavigationFailed {
                path: target,
                reason: "not a directory".into(),
            });
        }

        if self.follow_process_cwd {
            std::env::set_current_dir(&target)
                .map_err(|e| AppError::navigation_failed(&target, &e))?;
        }

        info!("Changed directory to {}", target.display());
        Ok(target)
    }

    fn remove(&self, path: &Path, kind: EntryKind) -> Result<(), AppError> {
        let result = match kind {
            EntryKind::Directory => fs::remove_dir(path),
            _ => fs::remove_file(path),
        };

        result.map_err(|e| AppError::file_operation_failed("delete", path, e.to_string()))
    }

    fn readable(&self, path: &Path) -> bool {
        resolve(path).and_then(fs::read_dir).is_ok()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_directory() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();

        fs::write(path.join("file1.txt"), b"12345").unwrap();
        fs::write(path.join("file2.txt"), b"").unwrap();
        fs::write(path.join(".hidden"), b"h").unwrap();
        fs::create_dir(path.join("subdir")).unwrap();

        temp_dir
    }

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_list_puts_parent_first_and_skips_hidden() {
        let temp_dir = create_test_directory();
        let entries = OsLister::detached().list(temp_dir.path(), false).unwrap();

        assert_eq!(entries.len(), 4);
        assert!(entries[0].is_parent_link());
        let listed = names(&entries);
        assert!(listed.contains(&"file1.txt"));
        assert!(listed.contains(&"subdir"));
        assert!(!listed.contains(&".hidden"));
        assert!(!listed.contains(&"."));
    }

    #[test]
    fn test_list_with_hidden_files() {
        let temp_dir = create_test_directory();
        let entries = OsLister::detached().list(temp_dir.path(), true).unwrap();

        assert_eq!(entries.len(), 5);
        assert!(names(&entries).contains(&".hidden"));
        assert_eq!(names(&entries).iter().filter(|n| **n == "..").count(), 1);
    }

    #[test]
    fn test_list_reports_kinds_and_sizes() {
        let temp_dir = create_test_directory();
        let entries = OsLister::detached().list(temp_dir.path(), false).unwrap();

        let file = entries.iter().find(|e| e.name == "file1.txt").unwrap();
        assert_eq!(file.kind, EntryKind::RegularFile);
        assert_eq!(file.size, 5);

        let dir = entries.iter().find(|e| e.name == "subdir").unwrap();
        assert_eq!(dir.kind, EntryKind::Directory);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_reports_symlinks_and_fifos() {
        let temp_dir = create_test_directory();
        let path = temp_dir.path();
        std::os::unix::fs::symlink(path.join("file1.txt"), path.join("link")).unwrap();
        std::os::unix::fs::symlink(path.join("missing"), path.join("dangling")).unwrap();

        let entries = OsLister::detached().list(path, false).unwrap();

        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert_eq!(link.kind, EntryKind::Symlink);
        assert_eq!(link.size, 5);

        let dangling = entries.iter().find(|e| e.name == "dangling").unwrap();
        assert_eq!(dangling.kind, EntryKind::Symlink);
        assert_eq!(dangling.size, 0);
    }

    #[test]
    fn test_list_missing_directory_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let result = OsLister::detached().list(&temp_dir.path().join("nope"), false);

        assert!(matches!(result, Err(AppError::ListingUnavailable { .. })));
    }

    #[test]
    fn test_change_directory_resolves_parent() {
        let temp_dir = create_test_directory();
        let sub = temp_dir.path().join("subdir");

        let resolved = OsLister::detached()
            .change_directory(&sub.join(PARENT_NAME))
            .unwrap();

        assert_eq!(resolved, fs::canonicalize(temp_dir.path()).unwrap());
    }

    #[test]
    fn test_parent_of_removed_directory_falls_back_to_ancestor() {
        let temp_dir = create_test_directory();
        let root = fs::canonicalize(temp_dir.path()).unwrap();
        let deep = root.join("subdir").join("deep");
        fs::create_dir(&deep).unwrap();
        fs::remove_dir(&deep).unwrap();
        fs::remove_dir(root.join("subdir")).unwrap();

        let lister = OsLister::detached();
        let parent_link = deep.join(PARENT_NAME);

        assert!(lister.readable(&parent_link));
        assert_eq!(lister.change_directory(&parent_link).unwrap(), root);
    }

    #[test]
    fn test_change_directory_rejects_files() {
        let temp_dir = create_test_directory();
        let result = OsLister::detached().change_directory(&temp_dir.path().join("file1.txt"));

        assert!(matches!(result, Err(AppError::NavigationFailed { .. })));
        assert!(matches!(
            OsLister::detached().change_directory(&temp_dir.path().join("nope")),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove_file_and_empty_dir() {
        let temp_dir = create_test_directory();
        let lister = OsLister::detached();

        lister
            .remove(&temp_dir.path().join("file2.txt"), EntryKind::RegularFile)
            .unwrap();
        lister
            .remove(&temp_dir.path().join("subdir"), EntryKind::Directory)
            .unwrap();

        assert!(!temp_dir.path().join("file2.txt").exists());
        assert!(!temp_dir.path().join("subdir").exists());
    }

    #[test]
    fn test_remove_non_empty_dir_fails() {
        let temp_dir = create_test_directory();
        fs::write(temp_dir.path().join("subdir/inner"), b"x").unwrap();

        let result =
            OsLister::detached().remove(&temp_dir.path().join("subdir"), EntryKind::Directory);

        assert!(matches!(result, Err(AppError::FileOperationFailed { .. })));
        assert!(temp_dir.path().join("subdir/inner").exists());
    }

    #[test]
    fn test_readable() {
        let temp_dir = create_test_directory();
        let lister = OsLister::detached();

        assert!(lister.readable(temp_dir.path()));
        assert!(!lister.readable(&temp_dir.path().join("nope")));
        assert!(!lister.readable(&temp_dir.path().join("file1.txt")));
    }

    #[test]
    fn test_normalize() {
        use test_support::normalize;
        assert_eq!(normalize(Path::new("/a/b/..")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("/a/./b")), PathBuf::from("/a/b"));
    }
}
