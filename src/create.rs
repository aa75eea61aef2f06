use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::PanelApi;
use crate::models::resource::{CreationResult, ResourceKind};

/// Serializes creation requests: at most one submission is in flight per
/// dialog instance, and a second attempt during that window is rejected.
/// There is no queueing; the UI disables the create action while
/// [`is_submitting`](Self::is_submitting) is true.
pub struct CreationOrchestrator {
    in_flight: AtomicBool,
}

impl CreationOrchestrator {
    pub fn new() -> Self {
        CreationOrchestrator {
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Sends `content` to the creation endpoint and interprets the outcome.
    ///
    /// Returns `Err` only when a prior submission is still unresolved. A
    /// remote rejection or a transport failure is a normal [`CreationResult`]
    /// failure; neither closes the dialog, so the user can correct the
    /// manifest and resubmit. The in-flight lock is released on every path.
    pub async fn submit(
        &self,
        api: &dyn PanelApi,
        content: &str,
        kind: ResourceKind,
    ) -> Result<CreationResult, String> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err("a creation request is already in flight".to_string());
        }

        log::info!("create: submitting {kind}");
        let outcome = api.create_resource(content, kind).await;
        self.in_flight.store(false, Ordering::SeqCst);

        let result = match outcome {
            Ok(response) => CreationResult {
                status_code: response.code,
                message: if response.data.message.is_empty() {
                    None
                } else {
                    Some(response.data.message)
                },
            },
            Err(e) => CreationResult {
                status_code: 0,
                message: Some(e),
            },
        };

        if result.is_success() {
            log::info!("create: {kind} created");
        } else {
            log::warn!("create: {}", result.notice());
        }

        Ok(result)
    }
}

impl Default for CreationOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resource::{CreationData, CreationResponse};
    use async_trait::async_trait;

    struct StubApi {
        outcome: Result<CreationResponse, String>,
    }

    #[async_trait]
    impl PanelApi for StubApi {
        async fn fetch_template(&self, _kind: ResourceKind) -> Result<String, String> {
            unreachable!("not used by the orchestrator")
        }

        async fn create_resource(
            &self,
            _content: &str,
            _kind: ResourceKind,
        ) -> Result<CreationResponse, String> {
            self.outcome.clone()
        }
    }

    fn response(code: u16, message: &str) -> CreationResponse {
        CreationResponse {
            code,
            data: CreationData {
                message: message.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn created_releases_lock_and_succeeds() {
        let orchestrator = CreationOrchestrator::new();
        let api = StubApi {
            outcome: Ok(response(201, "")),
        };

        let result = orchestrator
            .submit(&api, "kind: Pod", ResourceKind::Pod)
            .await
            .unwrap();

        assert!(result.is_success());
        assert!(!orchestrator.is_submitting());
    }

    #[tokio::test]
    async fn rejection_carries_the_server_message() {
        let orchestrator = CreationOrchestrator::new();
        let api = StubApi {
            outcome: Ok(response(409, "already exists")),
        };

        let result = orchestrator
            .submit(&api, "kind: Pod", ResourceKind::Pod)
            .await
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(
            result.notice(),
            "Failed to create resource: already exists"
        );
        assert!(!orchestrator.is_submitting());
    }

    #[tokio::test]
    async fn transport_failure_releases_lock() {
        let orchestrator = CreationOrchestrator::new();
        let api = StubApi {
            outcome: Err("connection refused".to_string()),
        };

        let result = orchestrator
            .submit(&api, "kind: Pod", ResourceKind::Pod)
            .await
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(
            result.notice(),
            "Failed to create resource: connection refused"
        );
        assert!(!orchestrator.is_submitting());
    }
}
