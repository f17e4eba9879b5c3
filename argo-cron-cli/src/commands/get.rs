//! Get command - print a cron workflow as YAML.

use super::ConnectionArgs;
use anyhow::{Context, Result};

/// Run the get command.
pub async fn run(conn: &ConnectionArgs, name: &str) -> Result<()> {
    let service = conn.service()?;
    let cron_workflow = service.get(name, conn.namespace.as_deref()).await?;

    let yaml = serde_yaml::to_string(&cron_workflow).context("Failed to render cron workflow")?;
    print!("{}", yaml);
    Ok(())
}
