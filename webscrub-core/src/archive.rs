// webscrub-core/src/archive.rs
//! Gzip-compressed tar archiving of directory trees.
//!
//! License: MIT OR Apache-2.0

use std::fs::File;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;

use crate::errors::WebscrubError;

/// Archives the contents of `in_path` into a `.tar.gz` at `out_path`.
///
/// Only regular files are written; entry names are relative to `in_path`
/// so the archive unpacks without the source directory prefix. File mode
/// and modification times come along via the tar headers.
pub fn tar_gz(out_path: impl AsRef<Path>, in_path: impl AsRef<Path>) -> Result<(), WebscrubError> {
    let in_path = in_path.as_ref();
    let out = File::create(out_path.as_ref())?;
    let encoder = GzEncoder::new(out, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    append_dir(&mut builder, in_path, in_path)?;

    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(())
}

fn append_dir(
    builder: &mut tar::Builder<GzEncoder<File>>,
    root: &Path,
    dir: &Path,
) -> Result<(), WebscrubError> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            append_dir(builder, root, &path)?;
        } else if entry.file_type()?.is_file() {
            let name = path.strip_prefix(root).map_err(|_| {
                WebscrubError::Fatal(format!(
                    "archive entry {} escapes root {}",
                    path.display(),
                    root.display()
                ))
            })?;
            debug!("archiving {}", name.display());
            builder.append_path_with_name(&path, name)?;
        }
        // symlinks and other special files are not archived
    }
    Ok(())
}
