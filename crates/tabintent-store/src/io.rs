//! JSONL I/O and atomic file operations

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Append a JSON record to a JSONL file
pub fn append_jsonl<T: Serialize>(path: &Path, record: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let json = serde_json::to_string(record)?;
    writeln!(file, "{}", json)?;
    Ok(())
}

/// Read all records from a JSONL file
pub fn read_jsonl<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => records.push(record),
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "skipping malformed line"),
        }
    }

    Ok(records)
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Read a JSON document, `None` when the file does not exist
pub fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<Option<T>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Pretty-print a JSON document and write it atomically
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    atomic_write(path, json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Record {
        id: u32,
        title: String,
    }

    #[test]
    fn test_jsonl_append_and_read() {
        let temp = tempfile::TempDir::new().unwrap();
        let log = temp.path().join("nested").join("log.jsonl");

        let records = vec![
            Record {
                id: 1,
                title: "first".to_string(),
            },
            Record {
                id: 2,
                title: "second".to_string(),
            },
        ];
        for record in &records {
            append_jsonl(&log, record).unwrap();
        }

        let read_back: Vec<Record> = read_jsonl(&log).unwrap();
        assert_eq!(records, read_back);
    }

    #[test]
    fn test_read_jsonl_skips_malformed_lines() {
        let temp = tempfile::TempDir::new().unwrap();
        let log = temp.path().join("log.jsonl");
        std::fs::write(&log, "{\"id\":1,\"title\":\"ok\"}\nnot json\n\n").unwrap();

        let read_back: Vec<Record> = read_jsonl(&log).unwrap();
        assert_eq!(read_back.len(), 1);
    }

    #[test]
    fn test_read_jsonl_missing_file_is_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let read_back: Vec<Record> = read_jsonl(&temp.path().join("missing.jsonl")).unwrap();
        assert!(read_back.is_empty());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("state.json");

        atomic_write(&target, b"{}").unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"{}");
        assert!(!target.with_extension("tmp").exists());
    }

    #[test]
    fn test_json_document_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("doc.json");

        assert!(read_json::<Record>(&target).unwrap().is_none());

        let record = Record {
            id: 9,
            title: "doc".to_string(),
        };
        write_json(&target, &record).unwrap();
        assert_eq!(read_json::<Record>(&target).unwrap(), Some(record));
    }
}
