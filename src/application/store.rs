//! JSON persistence for the aggregate snapshot

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::model::ResistanceSnapshot;
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::FileSystem;

/// Loads and saves [`ResistanceSnapshot`]s as JSON documents.
pub struct DataStore {
    fs: Arc<dyn FileSystem>,
}

impl DataStore {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and parse a snapshot. A missing or unreadable file surfaces as
    /// an I/O error, malformed JSON as a data error; both are fatal only to
    /// this one operation.
    pub fn load(&self, path: &Path) -> InfraResult<ResistanceSnapshot> {
        let path = with_json_extension(path);
        debug!(path = %path.display(), "loading data file");
        let text = self
            .fs
            .read_to_string(&path)
            .map_err(|e| InfraError::io(format!("read {}", path.display()), e))?;
        serde_json::from_str(&text).map_err(|source| InfraError::MalformedData { path, source })
    }

    /// Serialize a snapshot as pretty JSON and write it out.
    pub fn save(&self, path: &Path, snapshot: &ResistanceSnapshot) -> InfraResult<()> {
        let path = with_json_extension(path);
        debug!(path = %path.display(), "saving data file");
        let text = serde_json::to_string_pretty(snapshot).map_err(|source| {
            InfraError::MalformedData {
                path: path.clone(),
                source,
            }
        })?;
        self.fs
            .write(&path, &text)
            .map_err(|e| InfraError::io(format!("write {}", path.display()), e))
    }
}

/// Append `.json` when the user-supplied name has no extension.
fn with_json_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_json_extension() {
        assert_eq!(with_json_extension(Path::new("data")), PathBuf::from("data.json"));
        assert_eq!(
            with_json_extension(Path::new("data.json")),
            PathBuf::from("data.json")
        );
        assert_eq!(
            with_json_extension(Path::new("backup.dat")),
            PathBuf::from("backup.dat")
        );
    }
}
