//! CLI command implementations.

pub mod create;
pub mod delete;
pub mod get;
pub mod link;
pub mod list;
pub mod suspend;

use anyhow::{Context, Result};
use argo_cron_client::{Config, CronWorkflowService};
use clap::Args;
use std::fmt;

/// Connection options shared by every command.
#[derive(Args, Default)]
pub struct ConnectionArgs {
    /// Argo deployment domain (e.g. argo.example.com)
    #[arg(long, env = "ARGO_DOMAIN", global = true)]
    pub domain: Option<String>,

    /// Bearer token
    #[arg(long, env = "ARGO_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Kubernetes namespace (defaults to "default")
    #[arg(short, long, env = "ARGO_NAMESPACE", global = true)]
    pub namespace: Option<String>,

    /// Send API requests to this URL instead of https://<domain>
    #[arg(long, env = "ARGO_HOST", global = true)]
    pub host: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub insecure: bool,
}

impl fmt::Debug for ConnectionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionArgs")
            .field("domain", &self.domain)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("namespace", &self.namespace)
            .field("host", &self.host)
            .field("insecure", &self.insecure)
            .finish()
    }
}

impl ConnectionArgs {
    /// Build the client configuration.
    ///
    /// The token is only required for commands that talk to the server.
    pub fn config(&self, require_token: bool) -> Result<Config> {
        let mut config = self.base_config(require_token)?;
        if let Some(ref host) = self.host {
            config = config.with_host(host);
        }
        Ok(config)
    }

    /// Configuration without the `--host` override.
    pub fn base_config(&self, require_token: bool) -> Result<Config> {
        let domain = self
            .domain
            .as_deref()
            .context("No Argo domain given (use --domain or ARGO_DOMAIN)")?;

        let token = match (&self.token, require_token) {
            (Some(token), _) => token.clone(),
            (None, false) => String::new(),
            (None, true) => anyhow::bail!("No token given (use --token or ARGO_TOKEN)"),
        };

        let mut config = Config::new(domain, token).with_verify_ssl(!self.insecure);
        if let Some(ref namespace) = self.namespace {
            config = config.with_namespace(namespace);
        }
        Ok(config)
    }

    /// Build a service for commands that talk to the server.
    pub fn service(&self) -> Result<CronWorkflowService> {
        let config = self.config(true)?;
        tracing::debug!(config = ?config, "Connecting to Argo server");
        CronWorkflowService::new(config).context("Failed to create Argo client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ConnectionArgs {
        ConnectionArgs {
            domain: Some("argo.example.com".to_string()),
            token: Some("t0k3n".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn config_uses_flags() {
        let mut args = args();
        args.namespace = Some("prod".to_string());
        args.insecure = true;

        let config = args.config(true).unwrap();
        assert_eq!(config.domain(), "argo.example.com");
        assert_eq!(config.namespace(), "prod");
        assert!(!config.verify_ssl());
    }

    #[test]
    fn config_requires_domain() {
        let args = ConnectionArgs::default();
        assert!(args.config(false).is_err());
    }

    #[test]
    fn debug_redacts_token() {
        let debug = format!("{:?}", args());
        assert!(!debug.contains("t0k3n"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("argo.example.com"));
    }

    #[test]
    fn base_config_skips_host_override() {
        let mut args = args();
        args.host = Some("http://10.0.0.5:2746".to_string());

        assert_eq!(args.config(true).unwrap().base_url(), "http://10.0.0.5:2746");
        assert_eq!(
            args.base_config(true).unwrap().base_url(),
            "https://argo.example.com"
        );
    }

    #[test]
    fn token_optional_when_not_required() {
        let mut args = args();
        args.token = None;

        assert!(args.config(true).is_err());
        assert_eq!(args.config(false).unwrap().token(), "");
    }
}
