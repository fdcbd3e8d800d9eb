//! Scripted gateway and fixtures for controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use urus_core::error::ProtocolError;
use urus_core::{
    ApiUrl, BearerToken, CollectionGateway, CredentialProvider, FieldMap, Page, PageRequest,
    Record, RecordRef, RefToken, Result, UpdatePayload,
};

/// One recorded gateway call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List {
        path: String,
        request: PageRequest,
        limit: u32,
    },
    Update {
        path: String,
        token: String,
    },
    Delete {
        path: String,
        token: String,
    },
}

/// A gateway that replays scripted outcomes and records every call.
///
/// Outcome queues fall back to success (an empty page for lists) when
/// drained, so tests only script what they assert on.
#[derive(Default)]
pub struct MockGateway {
    calls: Mutex<Vec<Call>>,
    list_outcomes: Mutex<VecDeque<Result<Page>>>,
    update_outcomes: Mutex<VecDeque<Result<()>>>,
    delete_outcomes: Mutex<VecDeque<Result<()>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, outcome: Result<Page>) {
        self.list_outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn push_update(&self, outcome: Result<()>) {
        self.update_outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn push_delete(&self, outcome: Result<()>) {
        self.delete_outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_requests(&self) -> Vec<PageRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::List { request, .. } => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn update_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Update { .. }))
            .count()
    }
}

#[async_trait]
impl CollectionGateway for MockGateway {
    async fn list(
        &self,
        path: &str,
        request: &PageRequest,
        limit: u32,
        _credential: &BearerToken,
    ) -> Result<Page> {
        self.calls.lock().unwrap().push(Call::List {
            path: path.to_string(),
            request: request.clone(),
            limit,
        });
        self.list_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Page::default()))
    }

    async fn update(
        &self,
        path: &str,
        id: &RefToken,
        _payload: &UpdatePayload,
        _credential: &BearerToken,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Update {
            path: path.to_string(),
            token: id.as_str().to_string(),
        });
        self.update_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn delete(&self, path: &str, id: &RefToken, _credential: &BearerToken) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Delete {
            path: path.to_string(),
            token: id.as_str().to_string(),
        });
        self.delete_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

/// A provider with no credential, for unauthenticated-path tests.
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn bearer(&self) -> Option<BearerToken> {
        None
    }
}

pub fn base() -> ApiUrl {
    ApiUrl::new("https://api.example.com").unwrap()
}

pub fn record(iv: &str, name: &str) -> Record {
    Record {
        id: RecordRef::new(iv, "cipher").unwrap(),
        value: FieldMap::new(json!({
            "name": name,
            "description": "fixture",
            "image": "https://cdn.example.com/img.png"
        }))
        .unwrap(),
    }
}

pub fn page_of(names: &[&str]) -> Page {
    Page {
        items: names
            .iter()
            .enumerate()
            .map(|(i, name)| record(&format!("iv{i}"), name))
            .collect(),
        ..Page::default()
    }
}

pub fn server_error() -> urus_core::Error {
    ProtocolError::new(500, None, Some("token expired".to_string())).into()
}

pub fn client_error(status: u16) -> urus_core::Error {
    ProtocolError::new(status, None, None).into()
}
