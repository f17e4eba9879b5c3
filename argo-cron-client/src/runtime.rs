//! gRPC-gateway runtime payloads.
//!
//! These mirror the `grpc.gateway.runtime` definitions published in the Argo
//! Workflows OpenAPI document. They are plain value types: the server fills
//! them in, the client only decodes them.

use serde::{Deserialize, Serialize};

/// A `google.protobuf.Any` value carried in error details.
///
/// The gateway's JSON marshaller emits `{"@type": ..., <message fields>}`;
/// the binary form uses `type_url` and `value`. Both decode here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtobufAny {
    #[serde(default, alias = "@type", skip_serializing_if = "Option::is_none")]
    pub type_url: Option<String>,
    /// Base64-encoded message bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Fields of the embedded message in the JSON form.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Error envelope returned by the gateway for unary calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    /// gRPC status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ProtobufAny>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error envelope embedded in streamed results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ProtobufAny>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grpc_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Error {
    /// Human readable summary, preferring `message` over `error`.
    pub fn summary(&self) -> Option<&str> {
        non_empty(&self.message).or_else(|| non_empty(&self.error))
    }

    /// Decode an error body.
    ///
    /// Accepts both the unary envelope and the streaming form
    /// `{"error": {...StreamError...}}`. Returns `None` for bodies that are
    /// not JSON objects.
    pub fn from_body(body: &str) -> Option<Self> {
        #[derive(Deserialize)]
        struct StreamEnvelope {
            error: StreamError,
        }

        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        if !value.is_object() {
            return None;
        }
        if value.get("error").is_some_and(|e| e.is_object()) {
            return serde_json::from_value::<StreamEnvelope>(value)
                .ok()
                .map(|env| env.error.into());
        }
        serde_json::from_value(value).ok()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl From<StreamError> for Error {
    fn from(err: StreamError) -> Self {
        Self {
            code: err.grpc_code,
            details: err.details,
            error: err.http_status,
            message: err.message,
        }
    }
}
