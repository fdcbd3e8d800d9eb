//! HTTP-backed implementation of the collection gateway.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use urus_core::error::{Error, InvalidInputError};
use urus_core::{
    ApiUrl, BearerToken, CollectionGateway, Page, PageRequest, PayloadPart, RefToken,
    UpdatePayload,
};

use crate::client::HttpClient;
use crate::wire::ListEnvelope;

/// Collection gateway backed by the admin HTTP API.
///
/// Collection paths are joined onto the base URL; cursor fetches use the
/// cursor as a complete URL, so callers must normalize cursors to the
/// configured base before following them.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base: ApiUrl,
    client: HttpClient,
}

impl HttpGateway {
    /// Create a gateway against the given API base.
    pub fn new(base: ApiUrl) -> Self {
        Self {
            base,
            client: HttpClient::new(),
        }
    }

    /// Returns the configured API base URL.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    fn multipart_form(payload: &UpdatePayload) -> Result<Form, Error> {
        let mut form = Form::new();
        for (name, part) in payload.parts() {
            form = match part {
                PayloadPart::Text(value) => form.text(name.clone(), value.clone()),
                PayloadPart::File(file) => {
                    let part = Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone())
                        .mime_str(&file.content_type)
                        .map_err(|_| InvalidInputError::ContentType {
                            value: file.content_type.clone(),
                        })?;
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl CollectionGateway for HttpGateway {
    #[instrument(skip(self, credential))]
    async fn list(
        &self,
        path: &str,
        request: &PageRequest,
        limit: u32,
        credential: &BearerToken,
    ) -> Result<Page, Error> {
        let envelope: ListEnvelope = match request {
            PageRequest::ByOffset(page) => {
                let url = self.base.endpoint_url(path);
                let query = [("limit", limit.to_string()), ("page", page.to_string())];
                self.client
                    .get_json_with_query(&url, &query, credential)
                    .await?
            }
            PageRequest::ByCursor(cursor) => self.client.get_json(cursor, credential).await?,
        };

        let page = envelope.into_page();
        debug!(items = page.items.len(), total = ?page.total, "page fetched");
        Ok(page)
    }

    #[instrument(skip(self, payload, credential))]
    async fn update(
        &self,
        path: &str,
        id: &RefToken,
        payload: &UpdatePayload,
        credential: &BearerToken,
    ) -> Result<(), Error> {
        let url = self.base.record_url(path, id.as_str());
        let form = Self::multipart_form(payload)?;
        self.client.put_multipart(&url, form, credential).await
    }

    #[instrument(skip(self, credential))]
    async fn delete(&self, path: &str, id: &RefToken, credential: &BearerToken) -> Result<(), Error> {
        let url = self.base.record_url(path, id.as_str());
        self.client.delete(&url, credential).await
    }
}
