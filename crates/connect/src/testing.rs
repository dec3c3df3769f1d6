//! Recording transport for exercising the client without a network.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use fintrack_core::errors::{ApiError, Result};
use fintrack_core::models::UserId;
use fintrack_core::session::{InMemorySessionStore, Session};

use crate::client::FintrackApiClient;
use crate::config::ApiConfig;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};

/// Records every request and answers from a queue (200 `{}` once it runs dry).
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    responses: Arc<Mutex<VecDeque<ApiResponse>>>,
    offline: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.respond_raw(status, &body.to_string())
    }

    pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.responses.lock().unwrap().push_back(ApiResponse {
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        if self.offline {
            return Err(ApiError::Transport("connection refused".to_string()).into());
        }
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ApiResponse {
                status: 200,
                body: "{}".to_string(),
            }))
    }
}

/// A client over `transport`, logged in as `user` when given.
pub(crate) fn client(transport: &RecordingTransport, user: Option<UserId>) -> FintrackApiClient {
    let sessions = match user {
        Some(id) => InMemorySessionStore::with_session(Session::new(id, None)),
        None => InMemorySessionStore::new(),
    };
    FintrackApiClient::with_transport(
        Arc::new(transport.clone()),
        Arc::new(sessions),
        ApiConfig::default(),
    )
}
