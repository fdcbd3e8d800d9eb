//! Core validated types.

mod api_url;
mod record_ref;

pub use api_url::ApiUrl;
pub use record_ref::{RecordRef, RefToken};
