//! Recording `GitHubClient` for unit tests

use crate::client::GitHubClient;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request as seen by the transport
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub route: String,
    pub body: Option<serde_json::Value>,
}

/// Records every request and answers from a queue of scripted responses
///
/// An empty queue answers `Ok("")`, which is enough for DELETE.
#[derive(Debug, Default)]
pub struct MockClient {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<Result<String>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body
    pub fn respond_with(self, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.into()));
        self
    }

    /// Queue an API error
    pub fn fail_with(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Err(Error::Api {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(
        &self,
        method: &'static str,
        route: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            route: route.to_string(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

#[async_trait]
impl GitHubClient for MockClient {
    async fn get(&self, route: &str) -> Result<String> {
        self.record("GET", route, None)
    }

    async fn post(&self, route: &str, body: &serde_json::Value) -> Result<String> {
        self.record("POST", route, Some(body.clone()))
    }

    async fn delete(&self, route: &str) -> Result<()> {
        self.record("DELETE", route, None).map(drop)
    }
}
