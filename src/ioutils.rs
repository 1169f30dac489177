use std::path::Path;

use crate::error::{Error, Result};

/// Fails when any filesystem entry already exists at `path`.
pub fn ensure_absent<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    // symlink_metadata also catches dangling symlinks, which `exists` reports as absent
    if path.symlink_metadata().is_ok() {
        return Err(Error::ProjectExistsError { path: path.display().to_string() });
    }
    Ok(())
}

/// Creates `dest_path` (and missing parents) unless it already exists.
///
/// Returns `true` when the directory was created by this call.
pub fn create_dir_if_absent<P: AsRef<Path>>(dest_path: P) -> Result<bool> {
    let dest_path = dest_path.as_ref();
    if dest_path.exists() {
        return Ok(false);
    }
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)?;
    Ok(true)
}

/// Writes `content` to `dest_path`, replacing any previous content.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Removes a file if present. Returns `true` when something was removed.
pub fn remove_file_if_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    match std::fs::remove_file(path.as_ref()) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::IoError(e)),
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn ensure_absent_rejects_existing_entries() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("taken");
        fs::write(&file, "").unwrap();

        assert!(matches!(ensure_absent(&file), Err(Error::ProjectExistsError { .. })));
        assert!(ensure_absent(temp_dir.path().join("free")).is_ok());
    }

    #[test]
    fn create_dir_if_absent_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("src").join("hooks");

        assert!(create_dir_if_absent(&dir).unwrap());
        assert!(!create_dir_if_absent(&dir).unwrap());
        assert!(dir.is_dir());
    }

    #[test]
    fn write_file_creates_parents_and_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("src").join("App.css");

        write_file("body {}", &file).unwrap();
        write_file("", &file).unwrap();

        assert_eq!(fs::metadata(&file).unwrap().len(), 0);
    }

    #[test]
    fn remove_file_if_exists_reports_removal() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("tailwind.config.js");
        fs::write(&file, "module.exports = {}").unwrap();

        assert!(remove_file_if_exists(&file).unwrap());
        assert!(!remove_file_if_exists(&file).unwrap());
        assert!(!file.exists());
    }

    #[test]
    fn read_from_collects_reader() {
        let input = read_from("{\"text\": []}".as_bytes()).unwrap();
        assert_eq!(input, "{\"text\": []}");
    }
}
