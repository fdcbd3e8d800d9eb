//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated API base URL.
///
/// Base URLs must use HTTPS (or HTTP for localhost, which tests and local
/// deployments rely on). Endpoint URLs are built by joining a collection
/// path, and record URLs by appending an encoded reference token segment.
///
/// # Example
///
/// ```
/// use urus_core::ApiUrl;
///
/// let base = ApiUrl::new("https://api.example.com").unwrap();
/// assert_eq!(
///     base.endpoint_url("api/admin/banner"),
///     "https://api.example.com/api/admin/banner"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the endpoint URL for a collection path.
    pub fn endpoint_url(&self, path: &str) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so trim before joining the collection path
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the URL for a single record under a collection path.
    pub fn record_url(&self, path: &str, token: &str) -> String {
        format!("{}/{}", self.endpoint_url(path), token)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme.
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let base = ApiUrl::new("https://api.example.com").unwrap();
        assert_eq!(base.host(), Some("api.example.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let base = ApiUrl::new("http://localhost:5000").unwrap();
        assert_eq!(base.host(), Some("localhost"));
    }

    #[test]
    fn endpoint_url_construction() {
        let base = ApiUrl::new("https://api.example.com").unwrap();
        assert_eq!(
            base.endpoint_url("api/admin/banner"),
            "https://api.example.com/api/admin/banner"
        );
    }

    #[test]
    fn endpoint_url_normalizes_slashes() {
        let base = ApiUrl::new("https://api.example.com/").unwrap();
        assert_eq!(
            base.endpoint_url("/api/admin/banner"),
            "https://api.example.com/api/admin/banner"
        );
    }

    #[test]
    fn record_url_appends_token() {
        let base = ApiUrl::new("https://api.example.com").unwrap();
        assert_eq!(
            base.record_url("api/admin/banner", "dG9rZW4="),
            "https://api.example.com/api/admin/banner/dG9rZW4="
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://api.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/admin/banner").is_err());
    }
}
