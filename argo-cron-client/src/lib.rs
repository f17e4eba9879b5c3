//! Typed Rust client for the Argo Workflows cron workflow service.
//!
//! This crate wraps the cron workflow endpoints of an Argo server behind a
//! small typed interface. Each operation builds its request envelope, makes
//! one HTTP call and hands the result back as-is.
//!
//! # Features
//!
//! - Immutable connection [`Config`] with Bearer token authentication
//! - Cron workflow operations (create, delete, suspend, resume, get, list)
//! - Web UI link building
//! - gRPC-gateway error payloads decoded into [`runtime::Error`]
//! - A [`Transport`] trait for substituting the HTTP layer
//!
//! # Example
//!
//! ```no_run
//! use argo_cron_client::{Config, CronWorkflowService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = CronWorkflowService::new(Config::from_env()?)?;
//!
//! let response = service.suspend("nightly-report", Some("prod")).await?;
//! println!("Suspended (status {})", response.status);
//!
//! println!("{}", service.build_link("nightly-report", Some("prod")));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`. The service never retries
//! or rewraps what the transport reports:
//!
//! ```no_run
//! # use argo_cron_client::{ClientError, Config, CronWorkflowService};
//! # async fn example() -> Result<(), ClientError> {
//! # let service = CronWorkflowService::new(Config::new("argo.example.com", "token"))?;
//! match service.get("nightly-report", None).await {
//!     Ok(wf) => println!("Schedule: {:?}", wf.schedule()),
//!     Err(ClientError::Api { status: 404, .. }) => println!("Cron workflow not found"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod models;
pub mod runtime;
mod service;
mod transport;

pub use config::{Config, DEFAULT_NAMESPACE, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
pub use models::{
    API_VERSION, CreateCronWorkflowRequest, CronWorkflow, CronWorkflowList,
    CronWorkflowResumeRequest, CronWorkflowSuspendRequest, KIND, ListMeta, ObjectMeta,
    RawResponse,
};
pub use service::CronWorkflowService;
pub use transport::{HttpTransport, Transport};
