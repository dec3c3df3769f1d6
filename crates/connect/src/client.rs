//! HTTP client for the fintrack REST backend.
//!
//! One [`FintrackApiClient`] implements every per-resource API trait from
//! `fintrack-core`. It reads the acting user from the session store it was
//! given on every call, issues exactly one request per call and never retries.

use log::{debug, error};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use fintrack_core::errors::{ApiError, Error, Result};
use fintrack_core::models::{UserId, WireRecord};
use fintrack_core::session::SessionStore;

use crate::config::ApiConfig;
use crate::envelope::{decode_list, decode_one};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};

/// Longest slice of an error body kept in an `ApiError::Status`.
const ERROR_BODY_PREVIEW: usize = 200;

/// Data-access client for the fintrack backend.
///
/// # Example
///
/// ```ignore
/// let sessions = Arc::new(FileSessionStore::new(path));
/// let client = FintrackApiClient::new(ApiConfig::default(), sessions)?;
/// let transactions = client.get_transactions().await?;
/// ```
#[derive(Clone)]
pub struct FintrackApiClient {
    transport: Arc<dyn HttpTransport>,
    sessions: Arc<dyn SessionStore>,
    config: ApiConfig,
}

impl FintrackApiClient {
    /// Create a client talking to `config.base_url` over reqwest.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ApiConfig, sessions: Arc<dyn SessionStore>) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.base_url, config.timeout)?;
        Ok(Self::with_transport(Arc::new(transport), sessions, config))
    }

    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        sessions: Arc<dyn SessionStore>,
        config: ApiConfig,
    ) -> Self {
        Self {
            transport,
            sessions,
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn sessions(&self) -> Arc<dyn SessionStore> {
        self.sessions.clone()
    }

    /// Id of the logged-in user; `NotAuthenticated` before any request is made.
    pub(crate) fn user_id(&self) -> Result<UserId> {
        self.sessions.require_user_id()
    }

    /// Send one request and return the raw response. Only transport failures are errors.
    pub(crate) async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = request.method.as_str();
        let target = request.path_and_query();
        debug!("[FintrackApi] {} {}", method, target);

        self.transport.send(request).await.map_err(|e| {
            error!("[FintrackApi] {} {} failed: {}", method, target, e);
            e
        })
    }

    /// Send one request and parse the body of a successful response.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let method = request.method.as_str();
        let path = request.path.clone();
        let response = self.send(request).await?;

        Self::parse_response(response).map_err(|e| {
            error!("[FintrackApi] {} {} failed: {}", method, path, e);
            e
        })
    }

    /// Parse an HTTP response, turning error statuses into `ApiError::Status`.
    pub(crate) fn parse_response(response: ApiResponse) -> Result<Value> {
        if !response.is_success() {
            return Err(Error::Api(ApiError::Status {
                status: response.status,
                body: response.body.chars().take(ERROR_BODY_PREVIEW).collect(),
            }));
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| {
            Error::Api(ApiError::Decode(format!(
                "{} - {}",
                e,
                response.body.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
            )))
        })
    }

    /// GET a list endpoint for the current user and decode its rows.
    pub(crate) async fn get_list<T: WireRecord>(
        &self,
        path: &str,
        user_key: &str,
        context: &str,
    ) -> Result<Vec<T>> {
        let request = ApiRequest::get(path).query(user_key, self.user_id()?);
        let body = self.execute(request).await?;
        decode_list(body, self.config.shape_policy, context)
    }

    /// GET a single record.
    pub(crate) async fn get_one<T: WireRecord>(
        &self,
        request: ApiRequest,
        context: &str,
    ) -> Result<Option<T>> {
        let body = self.execute(request).await?;
        decode_one(body, self.config.shape_policy, context)
    }

    /// POST a mutation, adding the acting user's `UserID` to the body.
    ///
    /// The response body is returned as parsed, without interpretation.
    pub(crate) async fn post<P: Serialize>(&self, path: &str, payload: &P) -> Result<Value> {
        let user_id = self.user_id()?;
        let body = with_user_id(serde_json::to_value(payload)?, user_id)?;
        self.execute(ApiRequest::post(path, body)).await
    }
}

fn with_user_id(body: Value, user_id: UserId) -> Result<Value> {
    match body {
        Value::Object(mut map) => {
            map.insert("UserID".to_string(), Value::from(user_id));
            Ok(Value::Object(map))
        }
        other => Err(Error::Unexpected(format!(
            "mutation payload must be a JSON object, got {}",
            other
        ))),
    }
}
