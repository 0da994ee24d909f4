//! Filesystem metadata capability.
//!
//! This module defines the interface through which the rest of the crate
//! queries the filesystem: a single [`Filesystem`] trait exposing a metadata
//! lookup ([`Filesystem::stat`]) and a lazy depth-first directory walk
//! ([`Filesystem::walk`]). The production implementation, [`OsFilesystem`],
//! answers lookups from [`std::fs`] and walks with
//! [walkdir](https://docs.rs/walkdir/).
//!
//! Errors are typed: [`StatError`] classifies metadata-lookup failures into
//! the kinds the dispatcher cares about, and [`TraversalError`] carries the
//! offending path alongside the underlying I/O cause of a failed walk.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use thiserror::Error;
use walkdir::WalkDir;

/// Metadata for a single filesystem entry.
///
/// This is the result shape of a [`Filesystem::stat`] call: everything the
/// report layer needs to describe a file or directory.
#[derive(Debug, Clone, Copy)]
pub struct Metadata {
    /// Whether the entry is a directory
    pub is_dir: bool,

    /// Size of the entry in bytes
    pub size: u64,

    /// Last modification time
    pub modified: SystemTime,

    /// Platform permission bits (Unix mode; synthesized elsewhere)
    pub mode: u32,
}

/// One entry yielded by a directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path of the entry, rooted at the walk's starting directory
    pub path: PathBuf,

    /// Whether the entry is a directory
    pub is_dir: bool,

    /// Size of the entry in bytes
    pub size: u64,
}

/// Errors raised by a metadata lookup on a single path.
#[derive(Debug, Error)]
pub enum StatError {
    /// The path does not exist.
    #[error("{}: no such file or directory", path.display())]
    NotFound {
        /// The path that was queried
        path: PathBuf,

        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The path exists but the process may not read it.
    #[error("{}: permission denied", path.display())]
    PermissionDenied {
        /// The path that was queried
        path: PathBuf,

        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure.
    #[error("{}: {source}", path.display())]
    Other {
        /// The path that was queried
        path: PathBuf,

        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl StatError {
    /// Classify an [`io::Error`] raised while querying `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();

        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Other { path, source },
        }
    }

    /// The path the failed lookup was issued against.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Other { path, .. } => path,
        }
    }
}

/// Error raised when a directory walk cannot continue.
///
/// Carries the path of the entry that could not be accessed together with the
/// underlying I/O cause. A walk that raises this error is not restartable.
#[derive(Debug, Error)]
#[error("cannot access {}: {source}", path.display())]
pub struct TraversalError {
    /// The entry that could not be accessed
    pub path: PathBuf,

    /// The underlying I/O error
    #[source]
    pub source: io::Error,
}

impl TraversalError {
    fn from_walkdir(fallback: &Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            source: err.into(),
        }
    }
}

/// Capability interface for filesystem metadata queries.
///
/// The aggregation and dispatch layers depend on this trait rather than on
/// [`std::fs`] directly, so the shape of the collaborator is explicit.
pub trait Filesystem {
    /// Query the metadata of a single path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns a [`StatError`] classifying why the path could not be queried.
    fn stat(&self, path: &Path) -> Result<Metadata, StatError>;

    /// Lazily enumerate every entry reachable from `root`, depth-first.
    ///
    /// The first yielded entry is `root` itself. The order in which siblings
    /// are yielded is unspecified and may differ between platforms. Once an
    /// item resolves to an error the walk must not be resumed.
    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = Result<FileEntry, TraversalError>> + '_>;
}

/// [`Filesystem`] implementation backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn stat(&self, path: &Path) -> Result<Metadata, StatError> {
        let meta = fs::metadata(path).map_err(|e| StatError::from_io(path, e))?;
        let modified = meta.modified().map_err(|e| StatError::from_io(path, e))?;

        Ok(Metadata {
            is_dir: meta.is_dir(),
            size: meta.len(),
            modified,
            mode: mode_bits(&meta),
        })
    }

    fn walk(&self, root: &Path) -> Box<dyn Iterator<Item = Result<FileEntry, TraversalError>> + '_> {
        let root = root.to_path_buf();

        Box::new(WalkDir::new(&root).into_iter().map(move |entry| {
            let entry = entry.map_err(|e| TraversalError::from_walkdir(&root, e))?;
            let meta = entry
                .metadata()
                .map_err(|e| TraversalError::from_walkdir(entry.path(), e))?;

            Ok(FileEntry {
                path: entry.into_path(),
                is_dir: meta.is_dir(),
                size: meta.len(),
            })
        }))
    }
}

/// Extract platform permission bits from [`fs::Metadata`].
#[cfg(unix)]
fn mode_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;

    meta.mode()
}

/// Synthesize permission bits on platforms without a Unix mode.
#[cfg(not(unix))]
fn mode_bits(meta: &fs::Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_stat_regular_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        File::create(&path).unwrap().write_all(&[0u8; 42]).unwrap();

        let meta = OsFilesystem.stat(&path).unwrap();
        assert!(!meta.is_dir);
        assert_eq!(meta.size, 42);
    }

    #[test]
    fn test_stat_directory() {
        let dir = TempDir::new().unwrap();

        let meta = OsFilesystem.stat(dir.path()).unwrap();
        assert!(meta.is_dir);
    }

    #[test]
    fn test_stat_missing_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = OsFilesystem.stat(&missing).unwrap_err();
        assert!(matches!(err, StatError::NotFound { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn test_walk_yields_root_first() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let fs = OsFilesystem;
        let mut walk = fs.walk(dir.path());
        let first = walk.next().unwrap().unwrap();
        assert_eq!(first.path, dir.path());
        assert!(first.is_dir);
    }

    #[test]
    fn test_walk_reaches_nested_entries() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        File::create(dir.path().join("a/b/deep.txt")).unwrap();

        let entries: Vec<_> = OsFilesystem
            .walk(dir.path())
            .map(Result::unwrap)
            .collect();

        assert!(
            entries
                .iter()
                .any(|e| !e.is_dir && e.path.ends_with("a/b/deep.txt"))
        );
    }

    #[test]
    fn test_stat_error_classification() {
        let path = Path::new("/some/path");

        let not_found = StatError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(not_found, StatError::NotFound { .. }));

        let denied = StatError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, StatError::PermissionDenied { .. }));

        let other = StatError::from_io(path, io::Error::from(io::ErrorKind::TimedOut));
        assert!(matches!(other, StatError::Other { .. }));
    }
}
