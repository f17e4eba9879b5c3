//! Connection configuration.

use crate::error::{ClientError, Result};
use std::fmt;
use std::time::Duration;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for an Argo deployment.
///
/// Built once and handed to the transport; it is never mutated afterwards.
///
/// # Example
///
/// ```
/// use argo_cron_client::Config;
///
/// let config = Config::new("argo.example.com", "my-token").with_namespace("prod");
/// assert_eq!(config.base_url(), "https://argo.example.com");
/// assert_eq!(config.namespace(), "prod");
/// ```
#[derive(Clone)]
pub struct Config {
    domain: String,
    token: String,
    namespace: String,
    verify_ssl: bool,
    timeout: Duration,
    /// Overrides the `https://{domain}` base URL.
    host: Option<String>,
}

impl Config {
    /// Create a configuration for `domain`, authenticating with `token`.
    ///
    /// The token is sent as a Bearer token, which assumes the Argo server is
    /// fronted by something that checks it.
    pub fn new(domain: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            token: token.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            verify_ssl: true,
            timeout: DEFAULT_TIMEOUT,
            host: None,
        }
    }

    /// Load configuration from `ARGO_*` environment variables.
    ///
    /// `ARGO_DOMAIN` and `ARGO_TOKEN` are required; `ARGO_NAMESPACE`,
    /// `ARGO_VERIFY_SSL` and `ARGO_HOST` are optional.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if a required variable is missing or
    /// `ARGO_VERIFY_SSL` is not a boolean.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ClientError::Config(format!("{} is not set", key)))
        };

        let mut config = Self::new(required("ARGO_DOMAIN")?, required("ARGO_TOKEN")?);

        if let Some(namespace) = lookup("ARGO_NAMESPACE").filter(|v| !v.is_empty()) {
            config.namespace = namespace;
        }
        if let Some(raw) = lookup("ARGO_VERIFY_SSL") {
            config.verify_ssl = parse_bool(&raw).ok_or_else(|| {
                ClientError::Config(format!("ARGO_VERIFY_SSL must be a boolean, got: {}", raw))
            })?;
        }
        if let Some(host) = lookup("ARGO_HOST").filter(|v| !v.is_empty()) {
            config.host = Some(host);
        }

        Ok(config)
    }

    /// Set the namespace used when an operation is not given one.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Enable or disable TLS certificate verification.
    #[must_use]
    pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    /// Set the timeout applied to every request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send API requests to `host` instead of `https://{domain}`.
    ///
    /// Links are still built from the domain.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Base URL API requests are sent to.
    pub fn base_url(&self) -> String {
        match &self.host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.domain),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("domain", &self.domain)
            .field("token", &"<redacted>")
            .field("namespace", &self.namespace)
            .field("verify_ssl", &self.verify_ssl)
            .field("timeout", &self.timeout)
            .field("host", &self.host)
            .finish()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::new("argo.example.com", "t0k3n");
        assert_eq!(config.domain(), "argo.example.com");
        assert_eq!(config.namespace(), DEFAULT_NAMESPACE);
        assert!(config.verify_ssl());
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.base_url(), "https://argo.example.com");
    }

    #[test]
    fn test_host_override() {
        let config = Config::new("argo.example.com", "t").with_host("http://127.0.0.1:2746/");
        assert_eq!(config.base_url(), "http://127.0.0.1:2746");
        assert_eq!(config.domain(), "argo.example.com");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::new("argo.example.com", "super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("ARGO_DOMAIN", "argo.example.com"),
            ("ARGO_TOKEN", "t0k3n"),
            ("ARGO_NAMESPACE", "prod"),
            ("ARGO_VERIFY_SSL", "false"),
        ]))
        .unwrap();

        assert_eq!(config.token(), "t0k3n");
        assert_eq!(config.namespace(), "prod");
        assert!(!config.verify_ssl());
    }

    #[test]
    fn test_from_lookup_missing_token() {
        let err = Config::from_lookup(lookup(&[("ARGO_DOMAIN", "argo.example.com")])).unwrap_err();
        match err {
            ClientError::Config(msg) => assert!(msg.contains("ARGO_TOKEN")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_lookup_empty_namespace_keeps_default() {
        let config = Config::from_lookup(lookup(&[
            ("ARGO_DOMAIN", "argo.example.com"),
            ("ARGO_TOKEN", "t"),
            ("ARGO_NAMESPACE", ""),
        ]))
        .unwrap();
        assert_eq!(config.namespace(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_from_lookup_bad_verify_ssl() {
        let result = Config::from_lookup(lookup(&[
            ("ARGO_DOMAIN", "argo.example.com"),
            ("ARGO_TOKEN", "t"),
            ("ARGO_VERIFY_SSL", "maybe"),
        ]));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
