//! Resource and request types for the cron workflow service.
//!
//! Field names follow the camelCase JSON of the Argo Workflows API. The
//! cron workflow `spec` and `status` are kept as opaque JSON.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API version of cron workflow resources.
pub const API_VERSION: &str = "argoproj.io/v1alpha1";

/// Kind of cron workflow resources.
pub const KIND: &str = "CronWorkflow";

/// Kubernetes object metadata, limited to the fields the client reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    /// RFC 3339 timestamp set by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// A scheduled workflow definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronWorkflow {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Schedule, concurrency policy and workflow template.
    #[serde(default)]
    pub spec: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<serde_json::Value>,
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    KIND.to_string()
}

impl CronWorkflow {
    /// Create a named cron workflow with the given spec.
    pub fn new(name: impl Into<String>, spec: serde_json::Value) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..Default::default()
            },
            spec,
            status: None,
        }
    }

    /// Resource name, if set.
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Resource namespace, if set.
    pub fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref()
    }

    /// Cron schedule from the spec, if present.
    pub fn schedule(&self) -> Option<&str> {
        self.spec.get("schedule").and_then(|s| s.as_str())
    }

    /// Whether the spec marks the cron workflow as suspended.
    pub fn is_suspended(&self) -> bool {
        self.spec
            .get("suspend")
            .and_then(|s| s.as_bool())
            .unwrap_or(false)
    }
}

/// List metadata returned alongside collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    #[serde(rename = "continue", default, skip_serializing_if = "Option::is_none")]
    pub continue_token: Option<String>,
}

/// A page of cron workflows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CronWorkflowList {
    #[serde(default)]
    pub metadata: ListMeta,
    /// The server sends `null` for an empty namespace.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<CronWorkflow>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<CronWorkflow>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<CronWorkflow>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Envelope for the create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCronWorkflowRequest {
    pub namespace: String,
    pub cron_workflow: CronWorkflow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_options: Option<serde_json::Value>,
}

/// Envelope for the suspend operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronWorkflowSuspendRequest {
    pub name: String,
    pub namespace: String,
}

/// Envelope for the resume operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronWorkflowResumeRequest {
    pub name: String,
    pub namespace: String,
}

/// A response passed through without interpretation: body, status and headers.
#[derive(Debug, Clone)]
pub struct RawResponse<T> {
    pub body: T,
    pub status: u16,
    pub headers: HeaderMap,
}

impl<T> RawResponse<T> {
    /// Split into a `(body, status, headers)` triple.
    pub fn into_parts(self) -> (T, u16, HeaderMap) {
        (self.body, self.status, self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_uses_camel_case() {
        let request = CreateCronWorkflowRequest {
            namespace: "prod".to_string(),
            cron_workflow: CronWorkflow::new("nightly-report", json!({"schedule": "0 2 * * *"})),
            create_options: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["namespace"], "prod");
        assert_eq!(value["cronWorkflow"]["metadata"]["name"], "nightly-report");
        assert_eq!(value["cronWorkflow"]["apiVersion"], API_VERSION);
        assert_eq!(value["cronWorkflow"]["kind"], KIND);
        assert!(value.get("createOptions").is_none());
    }

    #[test]
    fn cron_workflow_reads_server_fields() {
        let wf: CronWorkflow = serde_json::from_value(json!({
            "metadata": {
                "name": "nightly-report",
                "namespace": "prod",
                "uid": "7d1c",
                "resourceVersion": "1042",
                "creationTimestamp": "2024-03-01T02:00:00Z",
                "labels": {"team": "data"},
                "managedFields": []
            },
            "spec": {"schedule": "0 2 * * *", "suspend": true, "workflowSpec": {}},
            "status": {"active": null}
        }))
        .unwrap();

        assert_eq!(wf.api_version, API_VERSION);
        assert_eq!(wf.name(), Some("nightly-report"));
        assert_eq!(wf.namespace(), Some("prod"));
        assert_eq!(wf.metadata.resource_version.as_deref(), Some("1042"));
        assert_eq!(wf.metadata.labels.get("team").map(String::as_str), Some("data"));
        assert_eq!(wf.schedule(), Some("0 2 * * *"));
        assert!(wf.is_suspended());
    }

    #[test]
    fn list_accepts_null_items() {
        let list: CronWorkflowList = serde_json::from_value(json!({
            "metadata": {"resourceVersion": "9", "continue": "abc"},
            "items": null
        }))
        .unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.metadata.continue_token.as_deref(), Some("abc"));
    }

    #[test]
    fn raw_response_splits_into_triple() {
        let raw = RawResponse {
            body: json!({}),
            status: 200,
            headers: HeaderMap::new(),
        };
        let (body, status, headers) = raw.into_parts();
        assert_eq!(body, json!({}));
        assert_eq!(status, 200);
        assert!(headers.is_empty());
    }
}
