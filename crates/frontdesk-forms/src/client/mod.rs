//! Submission Client
//!
//! Encodes a form snapshot as JSON or multipart, sends it once through a
//! [`Transport`], and turns the reply into a [`SubmissionResult`]. The client
//! never touches form state; the caller applies the result.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::schema::FormSchema;
use crate::state::FormSnapshot;

pub mod http;
pub mod payload;

pub use http::HttpTransport;
pub use payload::{encode, Part, PartContent, Payload};

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process request. Please try again.";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Submitted successfully.";

/// Outcome of one completed submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum SubmissionResult {
    Success(String),
    Failure(String),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionResult::Success(m) | SubmissionResult::Failure(m) => m,
        }
    }
}

/// A request ready to be sent
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub url: String,
    pub payload: Payload,
}

/// Raw HTTP reply
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network seam. `Err` means the request never produced a reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OutgoingRequest) -> Result<Reply>;

    /// Transport name for logs
    fn name(&self) -> &'static str;
}

/// Sends form snapshots to REST endpoints
#[derive(Clone)]
pub struct SubmissionClient {
    transport: Arc<dyn Transport>,
}

impl SubmissionClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Client backed by `reqwest`
    pub fn http() -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new()?)))
    }

    /// Issue exactly one request for the snapshot. No retries.
    pub async fn submit(
        &self,
        endpoint: &str,
        schema: &FormSchema,
        snapshot: &FormSnapshot,
    ) -> SubmissionResult {
        let payload = encode(schema, snapshot);
        info!(
            form = %schema.name,
            endpoint,
            encoding = payload.content_kind(),
            transport = self.transport.name(),
            "submitting form"
        );

        let request = OutgoingRequest {
            url: endpoint.to_string(),
            payload,
        };
        let reply = match self.transport.send(request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(form = %schema.name, error = %e, "submission request failed");
                return SubmissionResult::Failure(GENERIC_FAILURE_MESSAGE.to_string());
            }
        };

        let server_message = server_message(&reply.body);
        if reply.is_success() {
            let message = compose_success(schema, snapshot, server_message.as_deref());
            info!(form = %schema.name, status = reply.status, "submission accepted");
            SubmissionResult::Success(message)
        } else {
            warn!(
                form = %schema.name,
                status = reply.status,
                body = %reply.body,
                "submission rejected"
            );
            SubmissionResult::Failure(
                server_message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            )
        }
    }
}

/// `message` from a JSON body; string arrays are joined with `"; "`
pub fn server_message(body: &str) -> Option<String> {
    let json: JsonValue = serde_json::from_str(body).ok()?;
    let message = match json.get("message")? {
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(items) => items
            .iter()
            .filter_map(JsonValue::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Render the schema's success template with field values and the server's
/// confirmation message
pub fn compose_success(
    schema: &FormSchema,
    snapshot: &FormSnapshot,
    server_message: Option<&str>,
) -> String {
    let Some(template) = &schema.success_template else {
        return server_message.unwrap_or(DEFAULT_SUCCESS_MESSAGE).to_string();
    };

    // Single pass, so substituted text is never scanned for placeholders
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template.as_str();
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };
        let key = &after[..close];
        match key {
            "serverMessage" => rendered.push_str(server_message.unwrap_or_default()),
            _ if schema.get(key).is_some() => rendered.push_str(snapshot.text(key)),
            _ => rendered.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    rendered.push_str(rest);
    rendered.trim().to_string()
}
