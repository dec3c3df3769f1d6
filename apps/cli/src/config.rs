use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context};
use fintrack_connect::{
    ApiConfig, ShapePolicy, DEFAULT_API_URL, DEFAULT_LOGIN_SUCCESS_CODE, DEFAULT_TIMEOUT_SECS,
};

pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    pub login_success_code: u16,
    pub strict_shapes: bool,
    pub session_file: PathBuf,
    pub log_format: String,
}

fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fintrack")
        .join("session.json")
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = lookup("FINTRACK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let timeout_secs: u64 = match lookup("FINTRACK_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid FINTRACK_TIMEOUT_SECS '{}'", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let login_success_code: u16 = match lookup("FINTRACK_LOGIN_SUCCESS_CODE") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid FINTRACK_LOGIN_SUCCESS_CODE '{}'", raw))?,
            None => DEFAULT_LOGIN_SUCCESS_CODE,
        };
        let strict_shapes = match lookup("FINTRACK_STRICT_SHAPES") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow!("Invalid FINTRACK_STRICT_SHAPES '{}'", raw))?,
            None => false,
        };
        let session_file = lookup("FINTRACK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);
        let log_format = lookup("FINTRACK_LOG_FORMAT").unwrap_or_else(|| "text".into());

        Ok(Self {
            api_url,
            request_timeout: Duration::from_secs(timeout_secs),
            login_success_code,
            strict_shapes,
            session_file,
            log_format,
        })
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(&self.api_url)
            .with_timeout(self.request_timeout)
            .with_login_success_code(self.login_success_code)
            .with_shape_policy(ShapePolicy::from_strict_flag(self.strict_shapes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_url, "https://expensebackend.dockyardsoftware.com");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.login_success_code, 200);
        assert!(!config.strict_shapes);
        assert!(config.session_file.ends_with("fintrack/session.json"));
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn test_overrides_reach_api_config() {
        let config = config_from(&[
            ("FINTRACK_API_URL", "http://localhost:60748/"),
            ("FINTRACK_TIMEOUT_SECS", "5"),
            ("FINTRACK_LOGIN_SUCCESS_CODE", "1"),
            ("FINTRACK_STRICT_SHAPES", "yes"),
        ])
        .unwrap();
        let api = config.api_config();
        assert_eq!(api.base_url, "http://localhost:60748");
        assert_eq!(api.timeout, Duration::from_secs(5));
        assert_eq!(api.login_success_code, 1);
        assert_eq!(api.shape_policy, ShapePolicy::Strict);
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(config_from(&[("FINTRACK_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("FINTRACK_STRICT_SHAPES", "maybe")]).is_err());
    }
}
