//! Resource records, schemas and pagination types.

mod field_map;
mod page;
mod record;
mod schema;

pub use field_map::FieldMap;
pub use page::{Page, PageRequest};
pub use record::Record;
pub use schema::{FieldKind, FieldSpec, ResourceSchema};
