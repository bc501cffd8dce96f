//! Flat key/value submission payload.

use crate::attachment::StagedFile;

/// A binary part of the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadFile {
    pub field: &'static str,
    pub file: StagedFile,
}

/// Ordered text entries plus at most one file, ready to be framed as multipart.
///
/// Keys may repeat; repeated keys are how list-valued scalars such as `tags` travel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<(String, String)>,
    file: Option<PayloadFile>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    pub fn set_file(&mut self, field: &'static str, file: StagedFile) {
        self.file = Some(PayloadFile { field, file });
    }

    /// First value stored under `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value stored under `key`, in insertion order.
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn file(&self) -> Option<&PayloadFile> {
        self.file.as_ref()
    }
}
