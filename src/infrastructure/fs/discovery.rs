//! Script discovery
//!
//! Finds candidate files in the scan folder when no explicit list is given.
//! A file qualifies when its extension is in the configured list, when it is
//! executable, or when its first line is a shebang.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::domain::entities::LocalFile;

/// Scan `folder` (non-recursively) for script files, sorted by name.
///
/// Hidden files qualify like any other. `reserved` lists the tool's own
/// files (mapping, ignore file); they are never candidates.
pub fn discover_scripts(
    folder: &Path,
    extensions: &[String],
    reserved: &[PathBuf],
) -> std::io::Result<Vec<LocalFile>> {
    let reserved: Vec<PathBuf> = reserved
        .iter()
        .filter_map(|path| path.canonicalize().ok())
        .collect();
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        if path
            .canonicalize()
            .is_ok_and(|canonical| reserved.contains(&canonical))
        {
            trace!(path = %path.display(), "skipping reserved file");
            continue;
        }
        if is_script(&path, extensions) {
            trace!(path = %path.display(), "discovered script");
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths.into_iter().map(LocalFile::new).collect())
}

fn is_script(path: &Path, extensions: &[String]) -> bool {
    has_listed_extension(path, extensions) || is_executable(path) || has_shebang(path)
}

fn has_listed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    false
}

fn has_shebang(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut first = Vec::new();
    // Only the first line matters; cap the read for binaries without newlines.
    let mut reader = BufReader::new(file.take(256));
    if reader.read_until(b'\n', &mut first).is_err() {
        return false;
    }
    first.starts_with(b"#!")
}
