//! urus-core - Core types and traits for the urus admin API toolkit.

pub mod credentials;
pub mod cursor;
pub mod error;
pub mod gateway;
pub mod resource;
pub mod types;

pub use credentials::{BearerToken, CredentialProvider, EnvCredentials, StaticCredentials};
pub use cursor::CursorNormalizer;
pub use error::Error;
pub use gateway::{CollectionGateway, FileUpload, PayloadPart, UpdatePayload};
pub use resource::{FieldKind, FieldMap, FieldSpec, Page, PageRequest, Record, ResourceSchema};
pub use types::{ApiUrl, RecordRef, RefToken};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
