//! Comparison driver recomputes the merged trace when the selection changes
//!
//! A dashboard picks two drivers, a lap for each and a channel. Every change
//! of selection must fetch both traces, merge them and replace what is shown.
//! [`ComparisonDriver::spawn`] runs that loop on a tokio task:
//!
//! - selections arrive on a `watch` channel, so only the newest one matters
//! - both traces are fetched concurrently
//! - a selection change while fetching abandons the in-flight fetch
//! - results and failures are published on a second `watch` channel
//!
//! ```rust,no_run
//! use slipstream::comparison::{ComparisonDriver, ComparisonSelection, ComparisonState};
//! use slipstream::sources::FixtureSource;
//! use slipstream::{Channel, LapSelector, SessionKey};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> slipstream::Result<()> {
//! let source = FixtureSource::new("test-data/fixtures")?;
//! let selection = ComparisonSelection::new(
//!     SessionKey::new(2024, "Monaco Grand Prix", "R"),
//!     Channel::Speed,
//!     ("LEC", LapSelector::Fastest),
//!     ("PIA", LapSelector::Fastest),
//! );
//!
//! let handle = ComparisonDriver::spawn(source, Some(selection.clone()));
//! if let Some(ComparisonState::Ready { comparison, .. }) = handle.wait_for(&selection).await {
//!     println!("{} merged points", comparison.len());
//! }
//! # Ok(())
//! # }
//! ```

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::source::{TelemetryRequest, TelemetrySource};
use crate::telemetry::{MergeCache, TelemetryComparison};
use crate::types::{Channel, LapSelector, SessionKey, TelemetrySample};
use crate::{AnalyticsError, Result};

/// Two drivers, one lap each, one channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSelection {
    pub session: SessionKey,
    pub channel: Channel,
    pub driver_a: String,
    pub lap_a: LapSelector,
    pub driver_b: String,
    pub lap_b: LapSelector,
}

impl ComparisonSelection {
    pub fn new(
        session: SessionKey,
        channel: Channel,
        (driver_a, lap_a): (impl Into<String>, LapSelector),
        (driver_b, lap_b): (impl Into<String>, LapSelector),
    ) -> Self {
        Self {
            session,
            channel,
            driver_a: driver_a.into(),
            lap_a,
            driver_b: driver_b.into(),
            lap_b,
        }
    }

    pub fn request_a(&self) -> TelemetryRequest {
        TelemetryRequest::new(self.session.clone(), self.driver_a.clone(), self.lap_a, self.channel)
    }

    pub fn request_b(&self) -> TelemetryRequest {
        TelemetryRequest::new(self.session.clone(), self.driver_b.clone(), self.lap_b, self.channel)
    }
}

/// What the driver last published.
#[derive(Debug, Clone, Default)]
pub enum ComparisonState {
    /// Nothing selected yet
    #[default]
    Idle,
    /// Fetching traces for this selection
    Loading(ComparisonSelection),
    /// Merged trace for this selection
    Ready { selection: ComparisonSelection, comparison: Arc<TelemetryComparison> },
    /// Fetch failed; the driver keeps running and waits for the next selection
    Failed { selection: ComparisonSelection, message: String },
}

impl ComparisonState {
    pub fn selection(&self) -> Option<&ComparisonSelection> {
        match self {
            ComparisonState::Idle => None,
            ComparisonState::Loading(selection)
            | ComparisonState::Ready { selection, .. }
            | ComparisonState::Failed { selection, .. } => Some(selection),
        }
    }

    pub fn comparison(&self) -> Option<&Arc<TelemetryComparison>> {
        match self {
            ComparisonState::Ready { comparison, .. } => Some(comparison),
            _ => None,
        }
    }

    /// Ready or failed for exactly `selection`
    pub fn is_settled_for(&self, selection: &ComparisonSelection) -> bool {
        match self {
            ComparisonState::Ready { selection: s, .. }
            | ComparisonState::Failed { selection: s, .. } => s == selection,
            _ => false,
        }
    }
}

/// Spawns the comparison task
pub struct ComparisonDriver;

impl ComparisonDriver {
    /// Spawn a comparison task over `source`, optionally starting with a selection.
    ///
    /// The task runs until the returned handle is dropped.
    pub fn spawn<S>(source: S, selection: Option<ComparisonSelection>) -> ComparisonHandle
    where
        S: TelemetrySource,
    {
        let (selection_tx, selection_rx) = watch::channel(selection);
        let (state_tx, state_rx) = watch::channel(ComparisonState::Idle);
        let cancel = CancellationToken::new();

        let cancel_task = cancel.clone();
        tokio::spawn(async move {
            Self::comparison_task(Arc::new(source), selection_rx, state_tx, cancel_task).await;
        });

        ComparisonHandle { selections: selection_tx, states: state_rx, cancel }
    }

    async fn comparison_task<S>(
        source: Arc<S>,
        mut selections: watch::Receiver<Option<ComparisonSelection>>,
        states: watch::Sender<ComparisonState>,
        cancel: CancellationToken,
    ) where
        S: TelemetrySource,
    {
        info!("Comparison task started");
        let mut cache = MergeCache::new();
        let mut completed = 0u64;

        loop {
            let current = selections.borrow_and_update().clone();

            if let Some(selection) = current {
                debug!(
                    driver_a = %selection.driver_a,
                    driver_b = %selection.driver_b,
                    channel = %selection.channel,
                    "Fetching comparison"
                );
                let _ = states.send(ComparisonState::Loading(selection.clone()));

                let fetch = Self::fetch_pair(Arc::clone(&source), selection.clone());
                tokio::select! {
                    _ = cancel.cancelled() => {
                        info!("Comparison task cancelled during fetch");
                        break;
                    }
                    changed = selections.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        debug!("Selection changed during fetch, discarding in-flight result");
                        continue;
                    }
                    result = fetch => {
                        let state = match result {
                            Ok((series_a, series_b)) => {
                                completed += 1;
                                let comparison = cache.get_or_merge(
                                    &series_a,
                                    &series_b,
                                    selection.channel,
                                    &selection.driver_a,
                                    &selection.driver_b,
                                );
                                ComparisonState::Ready { selection, comparison }
                            }
                            Err(e) => {
                                warn!(error = %e, "Comparison fetch failed");
                                ComparisonState::Failed { selection, message: e.to_string() }
                            }
                        };
                        if states.send(state).is_err() {
                            debug!("State receivers dropped, shutting down");
                            break;
                        }
                    }
                }
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Comparison task cancelled");
                    break;
                }
                changed = selections.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        let (hits, misses) = cache.stats();
        info!(completed, hits, misses, "Comparison task ended");
    }

    async fn fetch_pair<S>(
        source: Arc<S>,
        selection: ComparisonSelection,
    ) -> Result<(Vec<TelemetrySample>, Vec<TelemetrySample>)>
    where
        S: TelemetrySource,
    {
        let request_a = selection.request_a();
        let request_b = selection.request_b();
        futures::try_join!(source.telemetry(&request_a), source.telemetry(&request_b))
    }
}

/// Handle to a running comparison task
pub struct ComparisonHandle {
    selections: watch::Sender<Option<ComparisonSelection>>,
    states: watch::Receiver<ComparisonState>,
    cancel: CancellationToken,
}

impl ComparisonHandle {
    /// Replace the selection. Any fetch still running for the previous one is abandoned.
    pub fn select(&self, selection: ComparisonSelection) -> Result<()> {
        self.selections
            .send(Some(selection))
            .map_err(|_| AnalyticsError::source_failed("comparison task has stopped"))
    }

    /// Latest published state
    pub fn state(&self) -> ComparisonState {
        self.states.borrow().clone()
    }

    /// Wait until `selection` is ready or has failed.
    ///
    /// Returns `None` if the task stopped first.
    pub async fn wait_for(&self, selection: &ComparisonSelection) -> Option<ComparisonState> {
        let mut states = self.states.clone();
        let state = states.wait_for(|state| state.is_settled_for(selection)).await.ok()?;
        Some(state.clone())
    }

    /// Every published state, starting with the current one
    pub fn states(&self) -> impl Stream<Item = ComparisonState> + 'static {
        WatchStream::new(self.states.clone())
    }

    /// Merged traces as they become ready
    pub fn updates(&self) -> impl Stream<Item = Arc<TelemetryComparison>> + 'static {
        self.states().filter_map(|state| async move { state.comparison().cloned() })
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }
}

impl Drop for ComparisonHandle {
    fn drop(&mut self) {
        debug!("Dropping comparison handle");
        self.cancel.cancel();
    }
}
