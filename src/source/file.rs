//! File-based record source.
//!
//! Reads a local JSON array of records in the same shape the HTTP endpoint
//! serves. Read once, on load.

use crate::model::{FetchError, Record};
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads the record collection from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FileNotFound` if the path does not exist,
    /// `FetchError::Io` for other read failures and `FetchError::Decode`
    /// when the contents are not a JSON array of records.
    pub fn load(&self) -> Result<Vec<Record>, FetchError> {
        if !self.path.exists() {
            return Err(FetchError::FileNotFound(self.path.clone()));
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records: Vec<Record> = serde_json::from_str(&contents)
            .map_err(|e| FetchError::decode(self.path.display().to_string(), e))?;

        info!(path = %self.path.display(), count = records.len(), "Loaded records from file");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_reads_record_array() {
        let path = std::env::temp_dir().join("postgrid_file_source_ok.json");
        fs::write(
            &path,
            r#"[{"userId":1,"id":1,"title":"a","body":"b"},{"userId":1,"id":2,"title":"c","body":"d"}]"#,
        )
        .unwrap();

        let records = FileSource::new(&path).load().unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], Record::new(1, 2, "c", "d"));
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let path = std::env::temp_dir().join("postgrid_file_source_missing.json");
        let _ = fs::remove_file(&path);

        let err = FileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, FetchError::FileNotFound(p) if p == path));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let path = std::env::temp_dir().join("postgrid_file_source_bad.json");
        fs::write(&path, r#"{"not":"an array"}"#).unwrap();

        let err = FileSource::new(&path).load().unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn directory_path_is_io_error() {
        let err = FileSource::new(std::env::temp_dir()).load().unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
