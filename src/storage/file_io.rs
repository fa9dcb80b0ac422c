//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave a half-written expense file
//! behind on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ExpenseError;

/// Read a text file, returning `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, ExpenseError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| ExpenseError::FileIo(format!("Could not load {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely replaced or left untouched.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ExpenseError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::FileIo(format!(
                "Could not create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::FileIo(format!("Could not save file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ExpenseError::FileIo(format!("Could not save file: {}", e))
        })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::FileIo(format!("Could not save file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        assert!(read_text(&path).unwrap().is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        write_text_atomic(&path, "12.50,Rent\n").unwrap();
        assert_eq!(read_text(&path).unwrap().as_deref(), Some("12.50,Rent\n"));
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        write_text_atomic(&path, "1.00,A\n2.00,B\n").unwrap();
        write_text_atomic(&path, "3.00,C\n").unwrap();
        assert_eq!(read_text(&path).unwrap().as_deref(), Some("3.00,C\n"));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        write_text_atomic(&path, "").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("expenses.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("expenses.txt");

        write_text_atomic(&path, "5.00,Travel\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_into_directory_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = write_text_atomic(temp_dir.path(), "x").unwrap_err();
        assert!(matches!(err, ExpenseError::FileIo(_)));
    }
}
