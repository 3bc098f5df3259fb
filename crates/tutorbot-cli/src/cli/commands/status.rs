//! Status command handler.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tutorbot_status::{HttpStatusFetch, StatusPoller};
use url::Url;

use crate::config::Config;
use crate::sink::TerminalIndicator;

pub async fn run(
    url: Option<&str>,
    watch: bool,
    interval: Option<u64>,
    config: &Config,
) -> Result<()> {
    let raw = url.unwrap_or(&config.status_url);
    let url = Url::parse(raw).with_context(|| format!("invalid status url '{raw}'"))?;
    let fetch = HttpStatusFetch::new(url)?;

    let interval = Duration::from_secs(interval.unwrap_or(config.poll_interval_secs));
    anyhow::ensure!(
        !interval.is_zero(),
        "poll interval must be at least one second"
    );

    let mut poller = StatusPoller::with_interval(fetch, TerminalIndicator::new(), interval);

    // One-shot: a single fetch, a single indicator line. The state never
    // fails, so a dead backend still prints its "unavailable" line.
    if !watch {
        poller.poll_once().await;
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    poller.run(cancel).await;
    eprintln!("status watch stopped");
    Ok(())
}
