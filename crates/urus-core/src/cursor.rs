//! Cursor URL normalization.
//!
//! The API embeds pagination cursors as full URLs, and those URLs sometimes
//! carry a stale host (the server's own `localhost` bind address) or a
//! legacy path segment from before a resource was renamed. The normalizer
//! rewrites a fixed set of known stale prefixes to the configured API base
//! and canonical path; everything past the matched prefix (query string,
//! counts) is kept verbatim. It is a pure string rewrite and idempotent, so
//! it can run both when a page is stored and again before a fetch.

use crate::resource::ResourceSchema;
use crate::types::ApiUrl;

/// Hosts the server is known to leak into generated cursor URLs.
const STALE_HOSTS: &[&str] = &["http://localhost:5000", "http://127.0.0.1:5000"];

#[derive(Debug, Clone)]
struct Rewrite {
    stale: String,
    canonical: String,
}

/// Rewrites stale pagination cursor (and media) URLs to the configured base.
#[derive(Debug, Clone)]
pub struct CursorNormalizer {
    rules: Vec<Rewrite>,
}

impl CursorNormalizer {
    /// A normalizer that only rewrites stale hosts to the given base.
    pub fn new(base: &ApiUrl) -> Self {
        let base_str = base.as_str().trim_end_matches('/').to_string();
        let rules = STALE_HOSTS
            .iter()
            .map(|host| Rewrite {
                stale: (*host).to_string(),
                canonical: base_str.clone(),
            })
            .collect();
        Self { rules }
    }

    /// A normalizer for one resource: legacy path aliases are rewritten to
    /// the schema's canonical path, then stale hosts to the base.
    ///
    /// Path rules are installed first so the longer prefix wins over the
    /// bare host rewrite.
    pub fn for_resource(base: &ApiUrl, schema: &ResourceSchema) -> Self {
        let mut normalizer = Self { rules: Vec::new() };
        for legacy in schema.legacy_paths() {
            for host in STALE_HOSTS {
                normalizer = normalizer.rewrite(
                    format!("{}/{}", host, legacy),
                    base.endpoint_url(schema.path()),
                );
            }
        }
        normalizer.rules.extend(Self::new(base).rules);
        normalizer
    }

    /// Add a custom rewrite rule. Rules are tried in insertion order.
    pub fn rewrite(mut self, stale: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.rules.push(Rewrite {
            stale: stale.into(),
            canonical: canonical.into(),
        });
        self
    }

    /// Rewrite the first matching stale prefix, leaving the rest of the URL
    /// untouched. Unrecognized URLs pass through unchanged.
    pub fn normalize(&self, url: &str) -> String {
        for rule in &self.rules {
            if let Some(rest) = url.strip_prefix(&rule.stale) {
                return format!("{}{}", rule.canonical, rest);
            }
        }
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ApiUrl {
        ApiUrl::new("https://api.example.com").unwrap()
    }

    #[test]
    fn rewrites_stale_host() {
        let normalizer = CursorNormalizer::new(&base());
        assert_eq!(
            normalizer.normalize("http://localhost:5000/api/admin/banner?limit=5&page=2"),
            "https://api.example.com/api/admin/banner?limit=5&page=2"
        );
    }

    #[test]
    fn rewrites_legacy_path() {
        let normalizer = CursorNormalizer::for_resource(&base(), &ResourceSchema::news_event());
        assert_eq!(
            normalizer.normalize("http://localhost:5000/api/admin/news_and_event?limit=5&page=3"),
            "https://api.example.com/api/admin/newsandevent?limit=5&page=3"
        );
    }

    #[test]
    fn custom_stale_host() {
        let normalizer = CursorNormalizer::new(&base()).rewrite(
            "http://stale-host/api/admin/banner",
            base().endpoint_url("api/admin/banner"),
        );
        assert_eq!(
            normalizer.normalize("http://stale-host/api/admin/banner?limit=5&page=2"),
            "https://api.example.com/api/admin/banner?limit=5&page=2"
        );
    }

    #[test]
    fn idempotent() {
        let normalizer = CursorNormalizer::for_resource(&base(), &ResourceSchema::news_event());
        let inputs = [
            "http://localhost:5000/api/admin/news_and_event?limit=5&page=2",
            "http://localhost:5000/uploads/banner.png",
            "https://api.example.com/api/admin/newsandevent?limit=5&page=2",
            "https://unrelated.example.org/whatever",
        ];
        for input in inputs {
            let once = normalizer.normalize(input);
            assert_eq!(normalizer.normalize(&once), once, "not idempotent: {input}");
        }
    }

    #[test]
    fn query_string_untouched() {
        let normalizer = CursorNormalizer::new(&base());
        let out = normalizer.normalize("http://localhost:5000/api/admin/component?limit=4&page=7");
        assert!(out.ends_with("?limit=4&page=7"));
    }

    #[test]
    fn unknown_urls_pass_through() {
        let normalizer = CursorNormalizer::new(&base());
        assert_eq!(
            normalizer.normalize("https://cdn.example.net/img.png"),
            "https://cdn.example.net/img.png"
        );
    }
}
