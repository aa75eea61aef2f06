use crate::api::PanelApi;
use crate::models::resource::ResourceKind;
use crate::storage::KvStore;

/// Storage key under which a kind's template is cached.
pub fn cache_key(kind: ResourceKind) -> String {
    format!("template-{kind}")
}

/// Write-through template cache.
///
/// Once a kind's template has been fetched it is persisted and never
/// refreshed from the network again; repeated selections of the same kind
/// are free after first use. A failed fetch caches nothing, so the caller
/// may retry by selecting the kind again (manual retry only).
pub struct TemplateCache<S: KvStore> {
    store: S,
}

impl<S: KvStore> TemplateCache<S> {
    pub fn new(store: S) -> Self {
        TemplateCache { store }
    }

    pub async fn resolve(&self, kind: ResourceKind, api: &dyn PanelApi) -> Result<String, String> {
        let key = cache_key(kind);

        if let Some(text) = self.store.get(&key) {
            log::info!("template: cache hit for {kind}");
            return Ok(text);
        }

        log::info!("template: cache miss for {kind}, fetching");
        let text = api.fetch_template(kind).await.map_err(|e| {
            log::warn!("template: fetch failed for {kind}: {e}");
            e
        })?;

        // A failed cache write must not lose a successful fetch; the next
        // selection simply fetches again.
        if let Err(e) = self.store.set(&key, &text) {
            log::warn!("template: cannot cache {kind}: {e}");
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resource::CreationResponse;
    use crate::storage::FileStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingApi {
        fetches: AtomicUsize,
        fail: bool,
    }

    impl CountingApi {
        fn new(fail: bool) -> Self {
            CountingApi {
                fetches: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl PanelApi for CountingApi {
        async fn fetch_template(&self, kind: ResourceKind) -> Result<String, String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err("boom".to_string())
            } else {
                Ok(format!("kind: {kind}"))
            }
        }

        async fn create_resource(
            &self,
            _content: &str,
            _kind: ResourceKind,
        ) -> Result<CreationResponse, String> {
            unreachable!("not used by the cache")
        }
    }

    #[tokio::test]
    async fn second_resolve_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TemplateCache::new(FileStore::new(dir.path()));
        let api = CountingApi::new(false);

        let first = cache.resolve(ResourceKind::Ingress, &api).await.unwrap();
        let second = cache.resolve(ResourceKind::Ingress, &api).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_caches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TemplateCache::new(FileStore::new(dir.path()));

        let failing = CountingApi::new(true);
        assert!(cache.resolve(ResourceKind::Secret, &failing).await.is_err());

        // retry after the failure goes back to the network
        let working = CountingApi::new(false);
        let text = cache.resolve(ResourceKind::Secret, &working).await.unwrap();
        assert_eq!(text, "kind: secret");
        assert_eq!(working.fetches.load(Ordering::SeqCst), 1);
    }
}
