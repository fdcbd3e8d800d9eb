//! urus-controller - The paginated remote-resource controller.
//!
//! One [`ResourceController`] instance drives the list/view/edit/delete
//! lifecycle of a single paged collection, generic over the transport via
//! [`urus_core::CollectionGateway`]. The per-resource variation (path,
//! page size, field list) is data, supplied as a
//! [`urus_core::ResourceSchema`].

mod controller;
mod draft;
mod state;

pub use controller::{DeleteTicket, LoadTicket, ResourceController, SubmitTicket};
pub use draft::{DraftValue, EditDraft};
pub use state::{Direction, LoadError, LoadState, Snapshot};
