//! Coalescing of concurrent prompt flows

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use acquire_meta::{InstallerResponse, Result};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tracing::debug;

type PendingPrompt = Shared<BoxFuture<'static, Result<InstallerResponse>>>;

#[derive(Default)]
struct Entries {
    next_generation: u64,
    pending: HashMap<String, (u64, PendingPrompt)>,
}

/// In-flight prompt flows keyed by product and resource.
///
/// A key has at most one pending flow. Callers arriving while it runs await
/// the same result. The entry is removed when the flow settles, whether it
/// succeeded or failed, so the next call for the key starts afresh.
#[derive(Clone, Default)]
pub struct PromptCache {
    entries: Arc<Mutex<Entries>>,
}

impl PromptCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Await the pending flow for `key`, or start one with `start`.
    pub async fn run<F>(&self, key: String, start: F) -> Result<InstallerResponse>
    where
        F: FnOnce() -> BoxFuture<'static, Result<InstallerResponse>>,
    {
        let pending = {
            let mut entries = self.lock();
            match entries.pending.get(&key) {
                Some((_, pending)) => {
                    debug!(%key, "Joining pending prompt");
                    pending.clone()
                }
                None => {
                    entries.next_generation += 1;
                    let generation = entries.next_generation;
                    let flow = start();
                    let cache = self.clone();
                    let settle_key = key.clone();
                    let pending = async move {
                        let result = flow.await;
                        cache.settle(&settle_key, generation);
                        result
                    }
                    .boxed()
                    .shared();
                    entries
                        .pending
                        .insert(key, (generation, pending.clone()));
                    pending
                }
            }
        };
        pending.await
    }

    #[cfg(test)]
    fn is_pending(&self, key: &str) -> bool {
        self.lock().pending.contains_key(key)
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.lock().pending.is_empty()
    }

    fn settle(&self, key: &str, generation: u64) {
        let mut entries = self.lock();
        if entries
            .pending
            .get(key)
            .is_some_and(|(current, _)| *current == generation)
        {
            entries.pending.remove(key);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acquire_meta::{Error, Product};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn counted(
        starts: Arc<AtomicUsize>,
        result: Result<InstallerResponse>,
    ) -> impl FnOnce() -> BoxFuture<'static, Result<InstallerResponse>> {
        move || {
            starts.fetch_add(1, Ordering::SeqCst);
            async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                result
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_flow() {
        let cache = PromptCache::new();
        let starts = Arc::new(AtomicUsize::new(0));

        let (a, b) = tokio::join!(
            cache.run(
                "pylint".to_string(),
                counted(starts.clone(), Ok(InstallerResponse::Installed))
            ),
            cache.run(
                "pylint".to_string(),
                counted(starts.clone(), Ok(InstallerResponse::Ignore))
            ),
        );

        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert_eq!(a, Ok(InstallerResponse::Installed));
        assert_eq!(b, Ok(InstallerResponse::Installed));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_distinct_keys_run_separately() {
        let cache = PromptCache::new();
        let starts = Arc::new(AtomicUsize::new(0));

        let (a, b) = tokio::join!(
            cache.run(
                "pylint".to_string(),
                counted(starts.clone(), Ok(InstallerResponse::Installed))
            ),
            cache.run(
                "pylint/work".to_string(),
                counted(starts.clone(), Ok(InstallerResponse::Disabled))
            ),
        );

        assert_eq!(starts.load(Ordering::SeqCst), 2);
        assert_eq!(a, Ok(InstallerResponse::Installed));
        assert_eq!(b, Ok(InstallerResponse::Disabled));
    }

    #[tokio::test]
    async fn test_settled_flow_is_not_reused() {
        let cache = PromptCache::new();
        let starts = Arc::new(AtomicUsize::new(0));

        let first = cache
            .run(
                "black".to_string(),
                counted(starts.clone(), Ok(InstallerResponse::Ignore)),
            )
            .await;
        let second = cache
            .run(
                "black".to_string(),
                counted(starts.clone(), Ok(InstallerResponse::Installed)),
            )
            .await;

        assert_eq!(first, Ok(InstallerResponse::Ignore));
        assert_eq!(second, Ok(InstallerResponse::Installed));
        assert_eq!(starts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_flow_clears_entry() {
        let cache = PromptCache::new();
        let starts = Arc::new(AtomicUsize::new(0));
        let failure = Error::NotInstallable {
            product: Product::Ctags,
        };

        let result = cache
            .run("ctags".to_string(), counted(starts.clone(), Err(failure.clone())))
            .await;

        assert_eq!(result, Err(failure));
        assert!(!cache.is_pending("ctags"));

        let retry = cache
            .run(
                "ctags".to_string(),
                counted(starts.clone(), Ok(InstallerResponse::Ignore)),
            )
            .await;
        assert_eq!(retry, Ok(InstallerResponse::Ignore));
        assert_eq!(starts.load(Ordering::SeqCst), 2);
    }
}
