//! Vendored Bootswatch listing and static-directory export.
//!
//! # Design
//! - `list_vendored` is best-effort: an unreadable root reads as "nothing
//!   vendored" so callers can always render a deterministic list.
//! - `copy_vendored` exports `<name>/bootstrap.min.css` per theme and writes
//!   a deterministic `VENDOR_LOCK.txt` so CI can diff the exported set.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::bootswatch::STYLESHEET_FILE;
use crate::error::AssetError;

/// Lock file written next to the exported themes.
pub const LOCK_FILE: &str = "VENDOR_LOCK.txt";

/// Outcome of a vendor export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorReport {
    /// Stylesheet files copied, in theme order.
    pub copied: Vec<PathBuf>,
    /// Location of the lock file describing the export.
    pub lock_path: PathBuf,
}

impl VendorReport {
    /// Number of stylesheet files copied.
    #[must_use]
    pub fn count(&self) -> usize {
        self.copied.len()
    }
}

/// Sorted names of vendored themes under `root`.
///
/// A theme counts as vendored when `<root>/<name>/bootstrap.min.css` exists.
/// Unreadable directories yield an empty list rather than an error.
#[must_use]
pub fn list_vendored(root: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };
    let mut themes: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().join(STYLESHEET_FILE).is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    themes.sort();
    themes
}

/// Copy vendored themes from `root` into `dest`, one directory per theme.
///
/// `selection` restricts the export to the named themes; `None` exports every
/// vendored theme. Returns the copied paths and the lock file location.
///
/// # Errors
///
/// Returns [`AssetError::Io`] when a destination directory, copy, read, or
/// lock write fails. Listing the source themes is still best-effort.
pub fn copy_vendored(
    root: &Path,
    dest: &Path,
    selection: Option<&[String]>,
) -> Result<VendorReport, AssetError> {
    fs::create_dir_all(dest).map_err(|source| AssetError::Io {
        operation: "create destination",
        path: dest.to_path_buf(),
        source,
    })?;

    let mut themes = list_vendored(root);
    if let Some(wanted) = selection {
        themes.retain(|name| wanted.iter().any(|candidate| candidate == name));
    }

    let mut copied = Vec::new();
    let mut lock_body = String::new();
    for name in &themes {
        let source_css = root.join(name).join(STYLESHEET_FILE);
        let out_dir = dest.join(name);
        fs::create_dir_all(&out_dir).map_err(|source| AssetError::Io {
            operation: "create theme directory",
            path: out_dir.clone(),
            source,
        })?;
        let target = out_dir.join(STYLESHEET_FILE);
        fs::copy(&source_css, &target).map_err(|source| AssetError::Io {
            operation: "copy stylesheet",
            path: source_css.clone(),
            source,
        })?;
        let digest = sha256_hex(&target)?;
        let _ = writeln!(lock_body, "{name}/{STYLESHEET_FILE} sha256 {digest}");
        copied.push(target);
        tracing::debug!(theme = %name, "vendored stylesheet exported");
    }

    let stats = dir_stats(dest);
    let _ = writeln!(lock_body, "files {} bytes {}", stats.files, stats.bytes);

    let lock_path = dest.join(LOCK_FILE);
    fs::write(&lock_path, lock_body).map_err(|source| AssetError::Io {
        operation: "write lock file",
        path: lock_path.clone(),
        source,
    })?;

    Ok(VendorReport { copied, lock_path })
}

fn sha256_hex(path: &Path) -> Result<String, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Io {
        operation: "read stylesheet",
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

#[derive(Debug, Clone, Copy)]
struct DirStats {
    files: u64,
    bytes: u64,
}

fn dir_stats(path: &Path) -> DirStats {
    let mut files = 0_u64;
    let mut bytes = 0_u64;
    for entry in WalkDir::new(path).min_depth(1).into_iter().flatten() {
        if entry.file_type().is_file() && entry.file_name() != LOCK_FILE {
            files += 1;
            bytes += entry.metadata().map_or(0, |metadata| metadata.len());
        }
    }
    DirStats { files, bytes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TempRoot;

    fn vendor_fixture(root: &Path, names: &[&str]) {
        for name in names {
            let dir = root.join(name);
            fs::create_dir_all(&dir).expect("theme dir");
            fs::write(dir.join(STYLESHEET_FILE), format!(".btn-{name}{{}}"))
                .expect("stylesheet");
        }
    }

    #[test]
    fn list_is_sorted_and_requires_the_stylesheet() {
        let temp = TempRoot::new().expect("temp root");
        vendor_fixture(temp.path(), &["zephyr", "flatly"]);
        fs::create_dir_all(temp.path().join("broken")).expect("dir without css");

        assert_eq!(list_vendored(temp.path()), vec!["flatly", "zephyr"]);
    }

    #[test]
    fn list_of_missing_root_is_empty() {
        let temp = TempRoot::new().expect("temp root");
        assert!(list_vendored(&temp.path().join("nope")).is_empty());
    }

    #[test]
    fn copy_exports_themes_and_writes_the_lock() {
        let temp = TempRoot::new().expect("temp root");
        let root = temp.path().join("vendor");
        let dest = temp.path().join("static");
        vendor_fixture(&root, &["flatly", "darkly"]);

        let report = copy_vendored(&root, &dest, None).expect("export");
        assert_eq!(report.count(), 2);
        assert!(dest.join("flatly").join(STYLESHEET_FILE).is_file());
        assert!(dest.join("darkly").join(STYLESHEET_FILE).is_file());

        let lock = fs::read_to_string(&report.lock_path).expect("lock");
        assert!(lock.contains("flatly/bootstrap.min.css sha256 "));
        assert!(lock.contains("files 2 bytes "));
    }

    #[test]
    fn selection_restricts_the_export() {
        let temp = TempRoot::new().expect("temp root");
        let root = temp.path().join("vendor");
        let dest = temp.path().join("static");
        vendor_fixture(&root, &["flatly", "darkly"]);

        let report =
            copy_vendored(&root, &dest, Some(&["darkly".to_string()])).expect("export");
        assert_eq!(report.count(), 1);
        assert!(!dest.join("flatly").exists());
        assert!(dest.join("darkly").join(STYLESHEET_FILE).is_file());
    }
}
