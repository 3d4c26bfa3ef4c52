// webscrub-core/src/fsutil.rs
//! File-system helpers: copy, recursive delete, existence checks, and a
//! thin rsync wrapper.
//!
//! These are deliberately small wrappers over `std::fs`; the one piece of
//! policy they add is that `copy_dir` logs and skips entries that fail to
//! copy instead of aborting the whole tree.
//!
//! License: MIT OR Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;

use log::warn;

use crate::errors::WebscrubError;

/// Predicate used by [`copy_dir`] to exclude entries from the copy.
pub type ExcludeFn<'a> = &'a dyn Fn(&fs::DirEntry) -> bool;

/// Copies a single file, propagating the source permissions best-effort.
pub fn copy_file(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<(), WebscrubError> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    fs::copy(source, dest)?;
    if let Ok(meta) = fs::metadata(source) {
        if let Err(e) = fs::set_permissions(dest, meta.permissions()) {
            warn!("could not copy permissions to {}: {}", dest.display(), e);
        }
    }
    Ok(())
}

/// Recursively copies `source` into `dest`.
///
/// `source` must be a directory and `dest` must not yet exist. Entries for
/// which any predicate in `excludes` returns true are skipped; entries that
/// fail to copy are logged and skipped, so one unreadable file does not
/// abort the rest of the tree.
pub fn copy_dir(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    excludes: &[ExcludeFn],
) -> Result<(), WebscrubError> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    let meta = fs::metadata(source)?;
    if !meta.is_dir() {
        return Err(WebscrubError::Fatal(format!(
            "copy_dir source is not a directory: {}",
            source.display()
        )));
    }
    if dest.exists() {
        return Err(WebscrubError::Fatal(format!(
            "copy_dir destination already exists: {}",
            dest.display()
        )));
    }
    fs::create_dir_all(dest)?;
    fs::set_permissions(dest, meta.permissions())?;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        if excludes.iter().any(|pred| pred(&entry)) {
            continue;
        }
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let result = if entry.file_type()?.is_dir() {
            copy_dir(&from, &to, excludes)
        } else {
            copy_file(&from, &to)
        };
        if let Err(e) = result {
            warn!("skipping {}: {}", from.display(), e);
        }
    }
    Ok(())
}

/// Deletes everything inside `dir` without removing `dir` itself.
pub fn remove_dir_contents(dir: impl AsRef<Path>) -> Result<(), WebscrubError> {
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// Creates `dir` (single level) if it does not exist yet.
pub fn make_dir_if_not_exists(dir: impl AsRef<Path>) -> Result<(), WebscrubError> {
    match fs::metadata(dir.as_ref()) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            fs::create_dir(dir.as_ref())?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn file_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref()).is_ok()
}

/// Stable sort of (path, modification time) pairs. `newest_first` puts the
/// most recently modified entries at the front.
pub fn sort_files_by_date(files: &mut [(PathBuf, SystemTime)], newest_first: bool) {
    if newest_first {
        files.sort_by(|a, b| b.1.cmp(&a.1));
    } else {
        files.sort_by(|a, b| a.1.cmp(&b.1));
    }
}

/// Invokes the system `rsync` with `params` (whitespace-separated flags),
/// copying `source` to `dest`; `delete` appends `--delete`.
pub fn rsync(source: &str, params: &str, dest: &str, delete: bool) -> Result<(), WebscrubError> {
    let mut cmd = Command::new("rsync");
    for param in params.split_whitespace() {
        cmd.arg(param);
    }
    cmd.arg(source).arg(dest);
    if delete {
        cmd.arg("--delete");
    }
    let status = cmd.status()?;
    if !status.success() {
        return Err(WebscrubError::Fatal(format!(
            "rsync exited with status {}",
            status
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(path: &Path, contents: &str) {
        let mut f = File::create(path).expect("create file");
        f.write_all(contents.as_bytes()).expect("write file");
    }

    #[test]
    fn copy_file_copies_contents() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("a.txt");
        let dst = dir.path().join("b.txt");
        write_file(&src, "payload");

        copy_file(&src, &dst).expect("copy failed");
        assert_eq!(fs::read_to_string(&dst).expect("read"), "payload");
    }

    // test_log captures the warn! output from skipped entries
    #[test_log::test]
    fn copy_dir_copies_tree_and_honors_excludes() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).expect("mkdir");
        write_file(&src.join("keep.txt"), "keep");
        write_file(&src.join("skip.log"), "skip");
        write_file(&src.join("nested/inner.txt"), "inner");

        let dst = dir.path().join("dst");
        let skip_logs: ExcludeFn = &|entry: &fs::DirEntry| {
            entry.path().extension().map(|e| e == "log").unwrap_or(false)
        };
        copy_dir(&src, &dst, &[skip_logs]).expect("copy_dir failed");

        assert!(dst.join("keep.txt").exists());
        assert!(dst.join("nested/inner.txt").exists());
        assert!(!dst.join("skip.log").exists());
    }

    #[test_log::test]
    fn copy_dir_refuses_existing_destination() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).expect("mkdir");
        fs::create_dir_all(&dst).expect("mkdir");

        assert!(copy_dir(&src, &dst, &[]).is_err());
    }

    #[test]
    fn copy_dir_refuses_file_source() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("file.txt");
        write_file(&src, "x");

        assert!(copy_dir(&src, dir.path().join("out"), &[]).is_err());
    }

    #[test]
    fn remove_dir_contents_keeps_the_dir() {
        let dir = tempdir().expect("tempdir");
        write_file(&dir.path().join("a.txt"), "a");
        fs::create_dir_all(dir.path().join("sub/deep")).expect("mkdir");
        write_file(&dir.path().join("sub/deep/b.txt"), "b");

        remove_dir_contents(dir.path()).expect("remove failed");
        assert!(dir.path().exists());
        assert_eq!(fs::read_dir(dir.path()).expect("read_dir").count(), 0);
    }

    #[test]
    fn make_dir_if_not_exists_is_idempotent() {
        let dir = tempdir().expect("tempdir");
        let target = dir.path().join("new");
        make_dir_if_not_exists(&target).expect("first create");
        make_dir_if_not_exists(&target).expect("second create");
        assert!(target.is_dir());
    }

    #[test]
    fn file_exists_checks() {
        let dir = tempdir().expect("tempdir");
        let f = dir.path().join("x");
        assert!(!file_exists(&f));
        write_file(&f, "");
        assert!(file_exists(&f));
    }

    #[test]
    fn sorting_by_date() {
        let t0 = SystemTime::UNIX_EPOCH;
        let t1 = t0 + std::time::Duration::from_secs(100);
        let t2 = t0 + std::time::Duration::from_secs(200);
        let mut files = vec![
            (PathBuf::from("mid"), t1),
            (PathBuf::from("new"), t2),
            (PathBuf::from("old"), t0),
        ];

        sort_files_by_date(&mut files, true);
        assert_eq!(files[0].0, PathBuf::from("new"));

        sort_files_by_date(&mut files, false);
        assert_eq!(files[0].0, PathBuf::from("old"));
    }
}
