//! List command - list cron workflows in a namespace.

use super::ConnectionArgs;
use anyhow::Result;
use argo_cron_client::CronWorkflow;

/// Run the list command.
pub async fn run(conn: &ConnectionArgs, selector: Option<&str>) -> Result<()> {
    let service = conn.service()?;
    let namespace = conn.namespace.as_deref().unwrap_or(service.namespace());
    tracing::info!(namespace = %namespace, selector = ?selector, "Listing cron workflows");

    let list = service.list(Some(namespace), selector).await?;

    if list.items.is_empty() {
        println!("No cron workflows found in {}", namespace);
        return Ok(());
    }

    println!("{:<32}  {:<20}  SUSPENDED", "NAME", "SCHEDULE");
    for cron_workflow in &list.items {
        println!("{}", format_row(cron_workflow));
    }
    Ok(())
}

fn format_row(cron_workflow: &CronWorkflow) -> String {
    format!(
        "{:<32}  {:<20}  {}",
        cron_workflow.name().unwrap_or("<unnamed>"),
        cron_workflow.schedule().unwrap_or("-"),
        if cron_workflow.is_suspended() { "yes" } else { "no" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_suspended_row() {
        let wf = CronWorkflow::new("nightly", json!({"schedule": "0 2 * * *", "suspend": true}));
        let row = format_row(&wf);
        assert!(row.starts_with("nightly "));
        assert!(row.contains("0 2 * * *"));
        assert!(row.ends_with("yes"));
    }

    #[test]
    fn formats_row_without_schedule() {
        let wf = CronWorkflow::new("adhoc", json!({}));
        let row = format_row(&wf);
        assert!(row.contains("  -  "));
        assert!(row.ends_with("no"));
    }
}
