//! Suspend and resume commands.

use super::ConnectionArgs;
use anyhow::Result;

/// Run the suspend command.
pub async fn suspend(conn: &ConnectionArgs, name: &str) -> Result<()> {
    let service = conn.service()?;
    let response = service.suspend(name, conn.namespace.as_deref()).await?;

    println!(
        "Suspended cron workflow {} (status {})",
        name, response.status
    );
    Ok(())
}

/// Run the resume command.
pub async fn resume(conn: &ConnectionArgs, name: &str) -> Result<()> {
    let service = conn.service()?;
    let response = service.resume(name, conn.namespace.as_deref()).await?;

    println!("Resumed cron workflow {} (status {})", name, response.status);
    Ok(())
}
