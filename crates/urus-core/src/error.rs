//! Error types for the urus crates.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, controller-usage, protocol, and input
//! validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for urus operations.
///
/// This error type covers all possible failure modes across the workspace,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (missing credential, expired session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Controller contract violations (no draft, duplicate operation).
    #[error("usage error: {0}")]
    Usage(#[from] UsageError),

    /// Protocol errors (non-2xx responses from the API).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (malformed reference, URL, field name).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No bearer credential available; the operation was never sent.
    #[error("no bearer token available")]
    MissingToken,

    /// The server reported that the session has expired.
    #[error("session expired")]
    SessionExpired,
}

/// Controller contract violations.
///
/// These indicate incorrect presentation-layer usage and must never occur
/// when intents are driven from the exposed snapshot; they are reported
/// explicitly rather than silently ignored so the contract stays testable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// A draft operation was attempted while no record is selected.
    #[error("no active edit draft")]
    NoActiveDraft,

    /// A submit was attempted while another submit is still in flight.
    #[error("a submit is already in flight")]
    OperationInFlight,

    /// A delete was attempted for a reference that is already pending.
    #[error("a delete for this record is already in flight")]
    AlreadyInFlight,

    /// A delete was attempted without the confirmation flag set.
    #[error("delete requires confirmation")]
    NotConfirmed,

    /// A record was selected while no page is loaded.
    #[error("no page is loaded")]
    NoLoadedPage,
}

/// Protocol-level errors from API responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error code from the server (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// Check if this is a server-class (5xx) error.
    ///
    /// The observed API signals an expired session with a 500 response,
    /// so server-class errors are classified as session expiry.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Malformed record reference.
    #[error("invalid record reference: {reason}")]
    RecordRef { reason: String },

    /// Malformed reference token.
    #[error("invalid reference token: {reason}")]
    RefToken { reason: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Record fields were not a JSON object.
    #[error("invalid field map: {reason}")]
    FieldMap { reason: String },

    /// A field name not present in the resource schema.
    #[error("unknown field '{name}' for resource '{resource}'")]
    UnknownField { name: String, resource: String },

    /// Invalid content type on a file upload.
    #[error("invalid content type '{value}'")]
    ContentType { value: String },
}
