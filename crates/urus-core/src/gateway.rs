//! Remote collection gateway trait.

use async_trait::async_trait;
use std::fmt;

use crate::credentials::BearerToken;
use crate::resource::{Page, PageRequest};
use crate::types::RefToken;
use crate::Result;

/// A file staged for upload as part of an update payload.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name reported to the server.
    pub file_name: String,
    /// MIME content type of the file.
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One named part of an update payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadPart {
    /// A text field.
    Text(String),
    /// A binary field.
    File(FileUpload),
}

/// The mixed text/binary body of an update call.
///
/// Parts are kept in insertion order; the transport encodes them as a
/// multipart form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePayload {
    parts: Vec<(String, PayloadPart)>,
}

impl UpdatePayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text part.
    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push((name.into(), PayloadPart::Text(value.into())));
    }

    /// Append a file part.
    pub fn push_file(&mut self, name: impl Into<String>, file: FileUpload) {
        self.parts.push((name.into(), PayloadPart::File(file)));
    }

    /// Returns the parts in insertion order.
    pub fn parts(&self) -> &[(String, PayloadPart)] {
        &self.parts
    }

    /// Returns true if the payload has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// The remote collection gateway consumed by the resource controller.
///
/// Implementations perform the actual network calls; the controller owns
/// all state transitions and error classification. Timeout behavior is the
/// gateway's concern.
#[async_trait]
pub trait CollectionGateway: Send + Sync {
    /// Fetch one page of a collection.
    async fn list(
        &self,
        path: &str,
        request: &PageRequest,
        limit: u32,
        credential: &BearerToken,
    ) -> Result<Page>;

    /// Update one record, identified by its encoded reference token.
    async fn update(
        &self,
        path: &str,
        id: &RefToken,
        payload: &UpdatePayload,
        credential: &BearerToken,
    ) -> Result<()>;

    /// Delete one record, identified by its encoded reference token.
    async fn delete(&self, path: &str, id: &RefToken, credential: &BearerToken) -> Result<()>;
}
