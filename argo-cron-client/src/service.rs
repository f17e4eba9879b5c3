//! Cron workflow service wrapper.

use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CreateCronWorkflowRequest, CronWorkflow, CronWorkflowList, CronWorkflowResumeRequest,
    CronWorkflowSuspendRequest, RawResponse,
};
use crate::transport::{HttpTransport, Transport};
use serde_json::Value;

/// Performs actions against cron workflows: creation, deletion, suspension
/// and so on.
///
/// Every method issues exactly one call to the underlying [`Transport`] and
/// returns its result unchanged. Operations that take a `namespace` fall back
/// to the service namespace when given `None`.
///
/// # Example
///
/// ```no_run
/// use argo_cron_client::{Config, CronWorkflow, CronWorkflowService};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = CronWorkflowService::new(Config::new("argo.example.com", "my-token"))?;
///
/// let spec = json!({
///     "schedule": "0 2 * * *",
///     "workflowSpec": {"entrypoint": "main", "templates": []}
/// });
/// let created = service
///     .create(CronWorkflow::new("nightly-report", spec), Some("prod"))
///     .await?;
/// println!("{}", service.build_link(created.name().unwrap_or_default(), Some("prod")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CronWorkflowService<T = HttpTransport> {
    domain: String,
    namespace: String,
    transport: T,
}

impl CronWorkflowService<HttpTransport> {
    /// Create a service talking HTTP to the configured Argo server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(&config, transport))
    }
}

impl<T: Transport> CronWorkflowService<T> {
    /// Create a service over an existing transport.
    pub fn with_transport(config: &Config, transport: T) -> Self {
        Self {
            domain: config.domain().to_string(),
            namespace: config.namespace().to_string(),
            transport,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Namespace used when an operation is not given one.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn resolve<'a>(&'a self, namespace: Option<&'a str>) -> &'a str {
        namespace.unwrap_or(&self.namespace)
    }

    /// Create the given cron workflow.
    ///
    /// The definition's `metadata.namespace` is overwritten with the target
    /// namespace so the envelope never carries two different namespaces.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn create(
        &self,
        mut cron_workflow: CronWorkflow,
        namespace: Option<&str>,
    ) -> Result<CronWorkflow> {
        let namespace = self.resolve(namespace);
        cron_workflow.metadata.namespace = Some(namespace.to_string());
        tracing::debug!(
            namespace = %namespace,
            name = cron_workflow.name().unwrap_or_default(),
            "Creating cron workflow"
        );

        let request = CreateCronWorkflowRequest {
            namespace: namespace.to_string(),
            cron_workflow,
            create_options: None,
        };
        self.transport.create_cron_workflow(namespace, &request).await
    }

    /// Delete a cron workflow by name.
    ///
    /// Returns the body, status code and headers as the server sent them.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn delete(&self, name: &str, namespace: Option<&str>) -> Result<RawResponse<Value>> {
        let namespace = self.resolve(namespace);
        tracing::debug!(namespace = %namespace, name = %name, "Deleting cron workflow");

        self.transport.delete_cron_workflow(namespace, name).await
    }

    /// Suspend a cron workflow so it stops scheduling new runs.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn suspend(&self, name: &str, namespace: Option<&str>) -> Result<RawResponse<Value>> {
        let namespace = self.resolve(namespace);
        tracing::debug!(namespace = %namespace, name = %name, "Suspending cron workflow");

        let request = CronWorkflowSuspendRequest {
            name: name.to_string(),
            namespace: namespace.to_string(),
        };
        self.transport
            .suspend_cron_workflow(namespace, name, &request)
            .await
    }

    /// Resume a suspended cron workflow.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn resume(&self, name: &str, namespace: Option<&str>) -> Result<RawResponse<Value>> {
        let namespace = self.resolve(namespace);
        tracing::debug!(namespace = %namespace, name = %name, "Resuming cron workflow");

        let request = CronWorkflowResumeRequest {
            name: name.to_string(),
            namespace: namespace.to_string(),
        };
        self.transport
            .resume_cron_workflow(namespace, name, &request)
            .await
    }

    /// Fetch a cron workflow by name.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn get(&self, name: &str, namespace: Option<&str>) -> Result<CronWorkflow> {
        let namespace = self.resolve(namespace);
        self.transport.get_cron_workflow(namespace, name).await
    }

    /// List cron workflows, optionally filtered by a label selector.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn list(
        &self,
        namespace: Option<&str>,
        label_selector: Option<&str>,
    ) -> Result<CronWorkflowList> {
        let namespace = self.resolve(namespace);
        self.transport
            .list_cron_workflows(namespace, label_selector)
            .await
    }

    /// Link to the cron workflow in the Argo web UI.
    ///
    /// Segments are inserted as given, without escaping.
    pub fn build_link(&self, name: &str, namespace: Option<&str>) -> String {
        format!(
            "https://{}/cron-workflows/{}/{}",
            self.domain,
            self.resolve(namespace),
            name
        )
    }
}
