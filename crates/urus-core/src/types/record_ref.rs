//! Opaque record reference and transport token codec.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// An opaque, encrypted record identifier.
///
/// The server issues these as `{iv, encryptedData}` pairs. The client never
/// interprets the contents; it only passes a reference through the codec to
/// obtain a [`RefToken`] for use as a path segment. A reference is valid
/// only when both fields are non-empty; equality is field-wise.
///
/// # Example
///
/// ```
/// use urus_core::RecordRef;
///
/// let id = RecordRef::new("a1b2", "c3d4").unwrap();
/// let token = id.encode().unwrap();
/// assert_eq!(token.decode().unwrap(), id);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRef {
    iv: String,
    encrypted_data: String,
}

impl RecordRef {
    /// Create a new record reference, validating that both parts are
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if either part is empty.
    pub fn new(iv: impl Into<String>, encrypted_data: impl Into<String>) -> Result<Self, Error> {
        let reference = Self {
            iv: iv.into(),
            encrypted_data: encrypted_data.into(),
        };
        reference.validate()?;
        Ok(reference)
    }

    /// Returns the initialization vector part.
    pub fn iv(&self) -> &str {
        &self.iv
    }

    /// Returns the ciphertext part.
    pub fn encrypted_data(&self) -> &str {
        &self.encrypted_data
    }

    /// Encode this reference into a transport token.
    ///
    /// The token is the base64 encoding of the reference's canonical JSON
    /// serialization, which is what the server decodes on its side. Encoding
    /// is deterministic: the same reference always produces the same token.
    ///
    /// # Errors
    ///
    /// Returns an error if either part of the reference is empty. Callers
    /// holding a reference built through [`RecordRef::new`] never hit this,
    /// but references can also arrive through deserialization.
    pub fn encode(&self) -> Result<RefToken, Error> {
        self.validate()?;
        let json = serde_json::to_string(self).map_err(|e| InvalidInputError::RecordRef {
            reason: e.to_string(),
        })?;
        Ok(RefToken(STANDARD.encode(json)))
    }

    fn validate(&self) -> Result<(), Error> {
        if self.iv.is_empty() {
            return Err(InvalidInputError::RecordRef {
                reason: "iv must be non-empty".to_string(),
            }
            .into());
        }
        if self.encrypted_data.is_empty() {
            return Err(InvalidInputError::RecordRef {
                reason: "encryptedData must be non-empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// An encoded record reference, safe to embed as a URL path segment.
///
/// Only the server interprets tokens; the client treats them as opaque
/// strings. [`RefToken::decode`] exists for tooling and tests.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RefToken(String);

impl RefToken {
    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the token back into a record reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not valid base64, does not contain
    /// the expected JSON shape, or decodes to an invalid reference.
    pub fn decode(&self) -> Result<RecordRef, Error> {
        let bytes = STANDARD
            .decode(&self.0)
            .map_err(|e| InvalidInputError::RefToken {
                reason: e.to_string(),
            })?;
        let reference: RecordRef =
            serde_json::from_slice(&bytes).map_err(|e| InvalidInputError::RefToken {
                reason: e.to_string(),
            })?;
        reference.validate()?;
        Ok(reference)
    }
}

impl fmt::Display for RefToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RefToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
