use std::time::Duration;

use async_trait::async_trait;

use crate::models::resource::{CreationResponse, ResourceKind};

// ── contract ──────────────────────────────────────────────────────────────────

/// Remote endpoints consumed by the provisioning workflow. Both calls may
/// fail with a transport or server error; faking this trait is how tests
/// drive the cache and the orchestrator.
#[async_trait]
pub trait PanelApi: Send + Sync {
    /// Fetches the starter manifest for `kind`.
    async fn fetch_template(&self, kind: ResourceKind) -> Result<String, String>;

    /// Submits `content` (an opaque manifest, passed through unmodified)
    /// for creation. A `code` of 201 is the sole success marker.
    async fn create_resource(
        &self,
        content: &str,
        kind: ResourceKind,
    ) -> Result<CreationResponse, String>;
}

// ── HTTP implementation ───────────────────────────────────────────────────────

/// reqwest-backed client for the panel's API routes.
pub struct HttpPanelApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPanelApi {
    /// Builds a client with a request timeout so a hung endpoint surfaces
    /// as a failure instead of an indefinite loading state.
    pub fn new(base_url: impl Into<String>) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(HttpPanelApi {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PanelApi for HttpPanelApi {
    async fn fetch_template(&self, kind: ResourceKind) -> Result<String, String> {
        let url = format!("{}/api/template/{kind}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("template request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("template request returned {}", response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| format!("template response unreadable: {e}"))
    }

    async fn create_resource(
        &self,
        content: &str,
        kind: ResourceKind,
    ) -> Result<CreationResponse, String> {
        let url = format!("{}/api/create", self.base_url);
        let body = serde_json::json!({ "kind": kind, "content": content });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("create request failed: {e}"))?;

        // Rejections also arrive as a CreationResponse body; the code field
        // decides, not the HTTP status.
        response
            .json::<CreationResponse>()
            .await
            .map_err(|e| format!("create response was not valid JSON: {e}"))
    }
}
