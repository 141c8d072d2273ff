#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::collections::BTreeMap;
use std::fmt;

/// Summary metadata returned by the ingestion endpoint, keyed by file name.
///
/// The summary shape is owned by the backend and kept as opaque JSON.
pub type DocumentSummaries = BTreeMap<String, serde_json::Value>;

/// A file chosen in the picker but not yet uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), bytes: bytes.into() }
    }
}

// Payloads can be megabytes; print the size instead.
impl fmt::Debug for PendingFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Pending selection, accumulated summaries, and the active document.
#[derive(Clone, Debug, Default)]
pub struct UploadManager {
    pending: Option<PendingFile>,
    summaries: DocumentSummaries,
    active_document: Option<String>,
}

impl UploadManager {
    /// Replace the pending selection. Only the latest pick is kept.
    pub fn select_file(&mut self, file: PendingFile) {
        self.pending = Some(file);
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingFile> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn summaries(&self) -> &DocumentSummaries {
        &self.summaries
    }

    #[must_use]
    pub fn active_document(&self) -> Option<&str> {
        self.active_document.as_deref()
    }

    /// Commit a successful upload of `file_name`.
    ///
    /// Merges `summaries`, makes `file_name` the active document, and clears
    /// the pending selection unless the user picked a different file while
    /// the upload was in flight.
    pub fn record_upload(&mut self, file_name: &str, summaries: DocumentSummaries) {
        self.summaries.extend(summaries);
        self.active_document = Some(file_name.to_owned());
        if self.pending.as_ref().is_some_and(|p| p.name == file_name) {
            self.pending = None;
        }
    }
}
