//! Create command - create a cron workflow from a manifest.

use super::ConnectionArgs;
use anyhow::{Context, Result};
use argo_cron_client::CronWorkflow;
use std::fs;
use std::path::Path;

/// Run the create command.
pub async fn run(conn: &ConnectionArgs, file: &str) -> Result<()> {
    let path = Path::new(file);

    if !path.exists() {
        anyhow::bail!("Manifest not found: {}", file);
    }

    let content =
        fs::read_to_string(path).context(format!("Failed to read manifest: {}", file))?;
    let cron_workflow = parse_manifest(&content)
        .with_context(|| format!("Failed to parse manifest: {}", file))?;

    let service = conn.service()?;

    let namespace = target_namespace(conn, &cron_workflow);

    tracing::info!(
        file = %file,
        name = cron_workflow.name().unwrap_or_default(),
        namespace = namespace.as_deref().unwrap_or(service.namespace()),
        "Creating cron workflow"
    );

    let created = service.create(cron_workflow, namespace.as_deref()).await?;

    let name = created.name().unwrap_or_default();
    let namespace = created
        .namespace()
        .or(namespace.as_deref())
        .unwrap_or(service.namespace());
    println!("Created cron workflow {} in {}", name, namespace);
    println!("{}", service.build_link(name, Some(namespace)));

    Ok(())
}

/// Namespace to create in: --namespace beats the manifest, which beats the
/// configured default (`None`). The service rewrites the manifest's
/// namespace to match.
fn target_namespace(conn: &ConnectionArgs, cron_workflow: &CronWorkflow) -> Option<String> {
    conn.namespace
        .clone()
        .or_else(|| cron_workflow.metadata.namespace.clone())
}

/// Parse a YAML or JSON cron workflow manifest.
fn parse_manifest(content: &str) -> Result<CronWorkflow> {
    let cron_workflow: CronWorkflow = serde_yaml::from_str(content)?;

    if cron_workflow.kind != argo_cron_client::KIND {
        anyhow::bail!(
            "Expected kind {}, got {}",
            argo_cron_client::KIND,
            cron_workflow.kind
        );
    }
    if cron_workflow.metadata.name.is_none() && cron_workflow.metadata.generate_name.is_none() {
        anyhow::bail!("Manifest needs metadata.name or metadata.generateName");
    }

    Ok(cron_workflow)
}
