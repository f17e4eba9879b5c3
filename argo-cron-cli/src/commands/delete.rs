//! Delete command - delete a cron workflow.

use super::ConnectionArgs;
use anyhow::Result;

/// Run the delete command.
pub async fn run(conn: &ConnectionArgs, name: &str) -> Result<()> {
    let service = conn.service()?;
    let response = service.delete(name, conn.namespace.as_deref()).await?;

    println!(
        "Deleted cron workflow {} (status {})",
        name, response.status
    );
    Ok(())
}
