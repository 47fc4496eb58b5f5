//! Small filesystem helpers shared by the stores.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Create the parent directory of `path` if it has a non-empty one.
pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Copy `src` to `dst`, creating `dst`'s parent directories first.
pub fn copy_with_parents(src: &Path, dst: &Path) -> std::io::Result<()> {
    ensure_parent(dst)?;
    fs::copy(src, dst)?;
    Ok(())
}

/// Write `bytes` to `path`, creating parent directories first.
pub fn write_with_parents(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    ensure_parent(path)?;
    fs::write(path, bytes)
}

/// Append `text` to the file at `path`, creating it (and parents) first.
pub fn append_with_parents(path: &Path, text: &str) -> std::io::Result<()> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())
}

/// Read a file as text, best effort.
///
/// Missing or unreadable files read as the empty string; invalid UTF-8 is
/// replaced rather than rejected, so almost-text files still diff.
pub fn read_text_best_effort(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}
