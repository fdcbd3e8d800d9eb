//! Resource record type.

use serde::{Deserialize, Serialize};

use crate::types::RecordRef;

use super::FieldMap;

/// A record from a paged collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// The opaque identity reference of this record.
    pub id: RecordRef,

    /// The record's fields.
    ///
    /// Guaranteed to be a JSON object. This is schema-agnostic;
    /// interpretation is driven by the resource schema.
    #[serde(flatten)]
    pub value: FieldMap,
}
