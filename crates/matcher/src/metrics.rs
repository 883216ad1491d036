// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then `MatchService` reports latency and result counts for every engine call.
// No metrics backend is linked here.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::MatchOperation;

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of one engine call.
    ///
    /// `candidates` is the number of candidates scored and `results` the number
    /// returned after filtering. Failed calls are reported with `ok == false`
    /// and zero counts.
    fn record_match(
        &self,
        operation: MatchOperation,
        latency: Duration,
        candidates: usize,
        results: usize,
        ok: bool,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Matcher;
    use crate::service::MatchService;
    use profile::ProfileId;
    use std::thread::{self, ThreadId};
    use store::{seed, InMemoryStore};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Recorded {
        operation: MatchOperation,
        candidates: usize,
        results: usize,
        ok: bool,
    }

    /// Collects calls made from one thread; other tests may run concurrently.
    struct CollectingMetrics {
        owner: ThreadId,
        events: RwLock<Vec<Recorded>>,
    }

    impl CollectingMetrics {
        fn new() -> Self {
            Self {
                owner: thread::current().id(),
                events: RwLock::new(Vec::new()),
            }
        }

        fn snapshot(&self) -> Vec<Recorded> {
            self.events.read().unwrap().clone()
        }
    }

    impl MatchMetrics for CollectingMetrics {
        fn record_match(
            &self,
            operation: MatchOperation,
            _latency: Duration,
            candidates: usize,
            results: usize,
            ok: bool,
        ) {
            if thread::current().id() != self.owner {
                return;
            }
            self.events.write().unwrap().push(Recorded {
                operation,
                candidates,
                results,
                ok,
            });
        }
    }

    #[test]
    fn metrics_recorder_tracks_match_outcomes() {
        let store = InMemoryStore::new();
        let users = seed::seed_demo(&store).unwrap();
        let service = MatchService::new(Arc::new(store), Matcher::default());

        let metrics = Arc::new(CollectingMetrics::new());
        set_match_metrics(Some(metrics.clone()));

        let recs = service.recommend(users[0].id).unwrap();
        assert_eq!(recs.len(), 2);
        assert!(service.recommend(ProfileId(404)).is_err());

        set_match_metrics(None);
        service.recommend(users[0].id).unwrap();

        assert_eq!(
            metrics.snapshot(),
            vec![
                Recorded {
                    operation: MatchOperation::Recommend,
                    candidates: 2,
                    results: 2,
                    ok: true,
                },
                Recorded {
                    operation: MatchOperation::Recommend,
                    candidates: 0,
                    results: 0,
                    ok: false,
                },
            ]
        );
    }
}
