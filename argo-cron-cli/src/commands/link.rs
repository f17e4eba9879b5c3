//! Link command - print the web UI link for a cron workflow.

use super::ConnectionArgs;
use anyhow::Result;
use argo_cron_client::CronWorkflowService;

/// Run the link command. No request is made.
pub fn run(conn: &ConnectionArgs, name: &str) -> Result<()> {
    println!("{}", link(conn, name)?);
    Ok(())
}

/// Build the link from the domain alone; `--host` only affects API calls.
fn link(conn: &ConnectionArgs, name: &str) -> Result<String> {
    let service = CronWorkflowService::new(conn.base_config(false)?)?;
    Ok(service.build_link(name, conn.namespace.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_ignores_malformed_host() {
        let conn = ConnectionArgs {
            domain: Some("argo.example.com".to_string()),
            namespace: Some("prod".to_string()),
            host: Some("argo:2746".to_string()),
            ..Default::default()
        };

        assert_eq!(
            link(&conn, "nightly-report").unwrap(),
            "https://argo.example.com/cron-workflows/prod/nightly-report"
        );
    }

    #[test]
    fn link_needs_no_token() {
        let conn = ConnectionArgs {
            domain: Some("argo.example.com".to_string()),
            ..Default::default()
        };

        assert_eq!(
            link(&conn, "hourly").unwrap(),
            "https://argo.example.com/cron-workflows/default/hourly"
        );
    }
}
