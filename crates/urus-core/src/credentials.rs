//! Bearer credentials and the credential provider abstraction.

use std::fmt;

/// A bearer token for the admin API.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Create a bearer token from a string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}

/// Source of the process-wide bearer credential.
///
/// The controller reads the credential at the start of each network
/// operation and never caches, refreshes or persists it. A `None` result
/// means the operation fails before any network call is made.
pub trait CredentialProvider: Send + Sync {
    /// Returns the current bearer token, if one is available.
    fn bearer(&self) -> Option<BearerToken>;
}

/// A fixed token, handed over at construction.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    token: BearerToken,
}

impl StaticCredentials {
    /// Create a provider that always returns the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: BearerToken::new(token),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn bearer(&self) -> Option<BearerToken> {
        Some(self.token.clone())
    }
}

/// Reads the token from a process environment variable on every call, so
/// an externally refreshed token is picked up without restarting.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Create a provider reading the given environment variable.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredentials {
    fn bearer(&self) -> Option<BearerToken> {
        std::env::var(&self.var)
            .ok()
            .filter(|v| !v.is_empty())
            .map(BearerToken::new)
    }
}
