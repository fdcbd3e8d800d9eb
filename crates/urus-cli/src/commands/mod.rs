//! Command implementations.

pub mod delete;
pub mod list;
pub mod update;

use std::sync::Arc;

use anyhow::{Context, Result};

use urus_controller::ResourceController;
use urus_core::{ApiUrl, CredentialProvider, EnvCredentials, StaticCredentials};
use urus_http::HttpGateway;

use crate::cli::ConnectionArgs;

/// Build a controller from the shared connection arguments.
pub fn controller(conn: &ConnectionArgs) -> Result<ResourceController<HttpGateway>> {
    let base = ApiUrl::new(&conn.api_base).context("Invalid API base URL")?;

    let credentials: Arc<dyn CredentialProvider> = match &conn.token {
        Some(token) => Arc::new(StaticCredentials::new(token)),
        None => Arc::new(EnvCredentials::new("URUS_TOKEN")),
    };

    let gateway = HttpGateway::new(base.clone());
    Ok(ResourceController::new(
        conn.resource.schema(),
        gateway,
        credentials,
        &base,
    ))
}
