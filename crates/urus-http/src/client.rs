//! HTTP client wrapper for admin API requests.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart::Form;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, trace};

use urus_core::error::{Error, ProtocolError, TransportError};
use urus_core::BearerToken;

use crate::wire::ApiErrorResponse;

/// HTTP client for the admin API.
///
/// All requests carry the bearer credential; response handling classifies
/// non-2xx statuses into [`ProtocolError`] and transport failures into
/// [`TransportError`].
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("urus/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// GET a JSON resource at a complete URL (cursor fetches).
    #[instrument(skip(self, token))]
    pub async fn get_json<R>(&self, url: &str, token: &BearerToken) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        debug!("GET");

        let response = self
            .client
            .get(url)
            .headers(self.auth_headers(token))
            .send()
            .await
            .map_err(into_transport)?;

        self.handle_response(response).await
    }

    /// GET a JSON resource with query parameters (offset fetches).
    #[instrument(skip(self, token))]
    pub async fn get_json_with_query<Q, R>(
        &self,
        url: &str,
        query: &Q,
        token: &BearerToken,
    ) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!("GET with query");
        trace!(?query, "query parameters");

        let response = self
            .client
            .get(url)
            .query(query)
            .headers(self.auth_headers(token))
            .send()
            .await
            .map_err(into_transport)?;

        self.handle_response(response).await
    }

    /// PUT a multipart form; the API reports success via a 2xx status with
    /// no body the client needs.
    #[instrument(skip(self, form, token))]
    pub async fn put_multipart(
        &self,
        url: &str,
        form: Form,
        token: &BearerToken,
    ) -> Result<(), Error> {
        debug!("PUT multipart");

        let response = self
            .client
            .put(url)
            .multipart(form)
            .headers(self.auth_headers(token))
            .send()
            .await
            .map_err(into_transport)?;

        self.expect_success(response).await
    }

    /// DELETE a resource.
    #[instrument(skip(self, token))]
    pub async fn delete(&self, url: &str, token: &BearerToken) -> Result<(), Error> {
        debug!("DELETE");

        let response = self
            .client
            .delete(url)
            .headers(self.auth_headers(token))
            .send()
            .await
            .map_err(into_transport)?;

        self.expect_success(response).await
    }

    /// Create authorization headers for authenticated requests.
    fn auth_headers(&self, token: &BearerToken) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token.as_str());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(into_transport)?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Protocol(error))
        }
    }

    /// Handle a response where only the status matters.
    async fn expect_success(&self, response: reqwest::Response) -> Result<(), Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(())
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Protocol(error))
        }
    }

    /// Parse an API error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        // Try to parse the API's error format; non-JSON bodies still yield
        // a status-only error
        match response.json::<ApiErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.error, body.message),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}

/// Map a reqwest failure into the transport taxonomy.
fn into_transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout { duration_ms: 0 }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
