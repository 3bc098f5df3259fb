//! The polling loop.
//!
//! Owns the current state and the render sink. `run` shows the loading
//! indicator once, fetches immediately, then re-fetches on a fixed
//! interval until cancelled. Because the loop owns both state and sink,
//! cancellation ends all writes and renders; an in-flight fetch is
//! dropped with its select arm.

use std::time::Duration;

use anyhow::Result;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::fetch::{StatusFetch, StatusPayload};
use crate::state::{Indicator, StatusState};

/// Injected render target for indicator updates.
pub trait IndicatorSink {
    fn render(&mut self, indicator: &Indicator);
}

/// Periodic status poller with injected fetch and sink.
pub struct StatusPoller<F, S> {
    fetch: F,
    sink: S,
    interval: Duration,
    state: StatusState,
    link: Option<String>,
}

impl<F: StatusFetch, S: IndicatorSink> StatusPoller<F, S> {
    /// Fixed re-fetch interval.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

    pub fn new(fetch: F, sink: S) -> Self {
        Self::with_interval(fetch, sink, Self::DEFAULT_INTERVAL)
    }

    pub fn with_interval(fetch: F, sink: S, interval: Duration) -> Self {
        Self {
            fetch,
            sink,
            interval,
            state: StatusState::Loading,
            link: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> StatusState {
        self.state
    }

    /// Performs one fetch, updates state and re-renders. Returns the
    /// resulting state. Never fails: errors map to `Unknown`.
    pub async fn poll_once(&mut self) -> StatusState {
        let result = self.fetch.fetch().await;
        self.apply(result);
        self.state
    }

    /// Runs the poll loop until the token is cancelled.
    ///
    /// The loading indicator is rendered exactly once, before the first
    /// fetch resolves; later polls update silently.
    pub async fn run(mut self, cancel: CancellationToken) {
        self.render();

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    // First tick fires immediately: the initial fetch.
                    self.poll_once().await;
                }
            }
        }
    }

    fn apply(&mut self, result: Result<StatusPayload>) {
        match result {
            Ok(payload) => {
                let state = StatusState::from_label(&payload.status);
                if state == StatusState::Unknown {
                    tracing::warn!(status = %payload.status, "unrecognized status value");
                }
                self.state = state;
                self.link = payload.status_page_url.filter(|url| !url.is_empty());
            }
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "status fetch failed");
                self.state = StatusState::Unknown;
                self.link = None;
            }
        }
        self.render();
    }

    fn render(&mut self) {
        let indicator = Indicator::new(self.state, self.link.clone());
        self.sink.render(&indicator);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use anyhow::anyhow;

    use super::*;

    /// Fetcher that replays a scripted sequence of results.
    struct ScriptedFetch {
        results: Mutex<VecDeque<Result<StatusPayload>>>,
    }

    impl ScriptedFetch {
        fn new(results: Vec<Result<StatusPayload>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
            }
        }
    }

    impl StatusFetch for ScriptedFetch {
        async fn fetch(&self) -> Result<StatusPayload> {
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow!("script exhausted")))
        }
    }

    /// Sink that records every render for later assertions.
    #[derive(Clone, Default)]
    struct RecordingSink {
        renders: Arc<Mutex<Vec<Indicator>>>,
    }

    impl RecordingSink {
        fn snapshot(&self) -> Vec<Indicator> {
            self.renders.lock().unwrap().clone()
        }
    }

    impl IndicatorSink for RecordingSink {
        fn render(&mut self, indicator: &Indicator) {
            self.renders.lock().unwrap().push(indicator.clone());
        }
    }

    fn operational_payload(url: Option<&str>) -> Result<StatusPayload> {
        Ok(StatusPayload {
            status: "operational".to_string(),
            status_page_url: url.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_failing_fetch_yields_unknown_without_link() {
        let sink = RecordingSink::default();
        let mut poller = StatusPoller::new(
            ScriptedFetch::new(vec![
                operational_payload(Some("https://x")),
                Err(anyhow!("connection refused")),
            ]),
            sink.clone(),
        );

        assert_eq!(poller.poll_once().await, StatusState::Operational);
        assert_eq!(poller.poll_once().await, StatusState::Unknown);

        let renders = sink.snapshot();
        // A failure clears the link learned from the previous success.
        assert_eq!(renders[1].link, None);
        assert_eq!(renders[1].color, StatusState::Unknown.color());
    }

    #[tokio::test]
    async fn test_operational_payload_sets_color_and_link() {
        let sink = RecordingSink::default();
        let mut poller = StatusPoller::new(
            ScriptedFetch::new(vec![operational_payload(Some("https://x"))]),
            sink.clone(),
        );

        poller.poll_once().await;

        let renders = sink.snapshot();
        assert_eq!(renders.len(), 1);
        assert_eq!(renders[0].color, StatusState::Operational.color());
        assert_eq!(renders[0].link.as_deref(), Some("https://x"));
        assert!(!renders[0].pulsing);
    }

    #[tokio::test]
    async fn test_unrecognized_status_maps_to_unknown() {
        let sink = RecordingSink::default();
        let mut poller = StatusPoller::new(
            ScriptedFetch::new(vec![Ok(StatusPayload {
                status: "maintenance".to_string(),
                status_page_url: None,
            })]),
            sink.clone(),
        );

        assert_eq!(poller.poll_once().await, StatusState::Unknown);
    }

    #[tokio::test]
    async fn test_empty_link_removes_affordance() {
        let sink = RecordingSink::default();
        let mut poller = StatusPoller::new(
            ScriptedFetch::new(vec![operational_payload(Some(""))]),
            sink.clone(),
        );

        poller.poll_once().await;
        assert_eq!(sink.snapshot()[0].link, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_shows_loading_only_before_first_resolution() {
        let sink = RecordingSink::default();
        let poller = StatusPoller::with_interval(
            ScriptedFetch::new(vec![
                operational_payload(None),
                Ok(StatusPayload {
                    status: "degraded".to_string(),
                    status_page_url: None,
                }),
            ]),
            sink.clone(),
            Duration::from_secs(60),
        );

        let cancel = CancellationToken::new();
        let task = tokio::spawn(poller.run(cancel.clone()));

        // Loading render plus the immediate first fetch.
        tokio::time::sleep(Duration::from_millis(10)).await;
        let renders = sink.snapshot();
        assert_eq!(renders.len(), 2);
        assert!(renders[0].pulsing);
        assert_eq!(renders[0].label, StatusState::Loading.label());
        assert_eq!(renders[1].color, StatusState::Operational.color());

        // Next interval: a silent update, no loading flash.
        tokio::time::sleep(Duration::from_secs(61)).await;
        let renders = sink.snapshot();
        assert_eq!(renders.len(), 3);
        assert_eq!(renders[2].color, StatusState::Degraded.color());
        assert!(renders[2..].iter().all(|r| !r.pulsing));

        // Teardown stops the loop; nothing renders afterwards.
        cancel.cancel();
        task.await.unwrap();
        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(sink.snapshot().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_start_renders_nothing_after_teardown() {
        let sink = RecordingSink::default();
        let poller = StatusPoller::with_interval(
            ScriptedFetch::new(vec![operational_payload(None)]),
            sink.clone(),
            Duration::from_secs(60),
        );

        let cancel = CancellationToken::new();
        cancel.cancel();
        poller.run(cancel).await;

        // Once run has returned, no further render can ever happen.
        let after_teardown = sink.snapshot().len();
        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(sink.snapshot().len(), after_teardown);
    }
}
