//! Controller load state and the presentation-facing snapshot.

use std::collections::HashSet;
use std::fmt;

use urus_core::error::{AuthError, Error};
use urus_core::{Page, RecordRef};

use crate::draft::EditDraft;

/// The load axis of the controller state machine.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A page request is in flight.
    Loading,
    /// The most recent request succeeded.
    Loaded(Page),
    /// The most recent request failed.
    Failed(LoadError),
}

impl LoadState {
    /// The loaded page, if any.
    pub fn page(&self) -> Option<&Page> {
        match self {
            LoadState::Loaded(page) => Some(page),
            _ => None,
        }
    }

    /// True while a page request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Presentation-facing classification of a failed load.
///
/// `Unauthenticated` and `ExpiredSession` should prompt re-authentication;
/// the controller never redirects or clears credentials itself. `Unknown`
/// failures are retryable by re-issuing the same intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No bearer credential was available; nothing was sent.
    Unauthenticated,
    /// The server signalled session expiry (5xx on the observed API).
    ExpiredSession,
    /// Anything else, including network unreachability.
    Unknown(String),
}

impl LoadError {
    /// Classify a gateway error for the presentation layer.
    pub fn classify(err: &Error) -> Self {
        match err {
            Error::Auth(AuthError::MissingToken) => LoadError::Unauthenticated,
            Error::Auth(AuthError::SessionExpired) => LoadError::ExpiredSession,
            Error::Protocol(p) if p.is_server_error() => LoadError::ExpiredSession,
            other => LoadError::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Unauthenticated => write!(f, "not authenticated"),
            LoadError::ExpiredSession => write!(f, "session expired"),
            LoadError::Unknown(message) => write!(f, "{}", message),
        }
    }
}

/// Paging direction for [`crate::ResourceController::advance_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow the `next` cursor.
    Next,
    /// Follow the `previous` cursor.
    Previous,
}

/// Read-only view of the controller state for rendering.
#[derive(Debug)]
pub struct Snapshot<'a> {
    /// The load axis.
    pub load: &'a LoadState,
    /// The active edit draft, if a record is selected.
    pub draft: Option<&'a EditDraft>,
    /// References with a delete in flight; per-row controls should disable.
    pub pending: &'a HashSet<RecordRef>,
}
