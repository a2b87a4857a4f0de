//! `reqwest` transport

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part as FormPart};
use reqwest::Client;
use tracing::debug;

use super::payload::{PartContent, Payload};
use super::{OutgoingRequest, Reply, Transport};

/// HTTP transport. No timeout is configured: a request resolves when the
/// network layer resolves it.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("frontdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn multipart(parts: Vec<super::Part>) -> Result<Form> {
        let mut form = Form::new();
        for part in parts {
            form = match part.content {
                PartContent::Text(text) => form.text(part.name, text),
                PartContent::File(file) => {
                    let media_type = file.media_type.clone();
                    let file_part = FormPart::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&media_type)
                        .with_context(|| format!("Invalid media type: {}", media_type))?;
                    form.part(part.name, file_part)
                }
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<Reply> {
        let builder = self.client.post(&request.url);
        let builder = match request.payload {
            Payload::Json(body) => builder.json(&body),
            Payload::Multipart(parts) => builder.multipart(Self::multipart(parts)?),
        };

        let response = builder
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", request.url))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        debug!(url = %request.url, status, "received reply");

        Ok(Reply { status, body })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
