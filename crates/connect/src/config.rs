//! Backend contract knobs for the data-access client.

use std::str::FromStr;
use std::time::Duration;

use fintrack_core::errors::{Error, Result};

/// Default base URL of the fintrack backend.
pub const DEFAULT_API_URL: &str = "https://expensebackend.dockyardsoftware.com";

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `StatusCode` inside a login body that means the login succeeded.
pub const DEFAULT_LOGIN_SUCCESS_CODE: u16 = 200;

/// What to do when a list response carries none of the known list fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapePolicy {
    /// Log a warning and treat the list as empty.
    #[default]
    Lenient,
    /// Fail with `ApiError::UnexpectedShape`.
    Strict,
}

impl ShapePolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            ShapePolicy::Strict
        } else {
            ShapePolicy::Lenient
        }
    }
}

impl FromStr for ShapePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ShapePolicy::Lenient),
            "strict" => Ok(ShapePolicy::Strict),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown shape policy '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub login_success_code: u16,
    pub shape_policy: ShapePolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            login_success_code: DEFAULT_LOGIN_SUCCESS_CODE,
            shape_policy: ShapePolicy::default(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_login_success_code(mut self, code: u16) -> Self {
        self.login_success_code = code;
        self
    }

    pub fn with_shape_policy(mut self, policy: ShapePolicy) -> Self {
        self.shape_policy = policy;
        self
    }
}
