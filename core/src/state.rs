//! Presentation state for the country list screen.
//!
//! # Design
//! `CountryListState` owns a `watch` channel holding the current
//! `LoadingState`. The rendering layer reads snapshots through the derived
//! views or subscribes for change notifications. `load` and `retry` take
//! `&self`, so nothing stops two loads from overlapping: each writes its own
//! outcome when it completes and the last write wins. An abandoned load still
//! writes when it resolves. In-flight requests are neither deduplicated nor
//! cancelled.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::CountryError;
use crate::model::{sorted_by_name, Country};
use crate::repository::CountryRepository;

/// Four-state lifecycle of a single load.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(CountryError),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn error(&self) -> Option<&CountryError> {
        match self {
            LoadingState::Failure(err) => Some(err),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadingState::Success(value) => Some(value),
            _ => None,
        }
    }
}

/// State holder for one country list screen session.
pub struct CountryListState<R> {
    repository: R,
    state: watch::Sender<LoadingState<Vec<Country>>>,
}

impl<R: CountryRepository> CountryListState<R> {
    pub fn new(repository: R) -> Self {
        let (state, _) = watch::channel(LoadingState::Idle);
        Self { repository, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadingState<Vec<Country>> {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state write.
    pub fn subscribe(&self) -> watch::Receiver<LoadingState<Vec<Country>>> {
        self.state.subscribe()
    }

    /// Countries of a successful load, sorted by name; empty otherwise.
    pub fn countries(&self) -> Vec<Country> {
        self.state.borrow().value().cloned().unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.borrow().error().map(ToString::to_string)
    }

    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        self.state.borrow().error().and_then(CountryError::recovery_suggestion)
    }

    /// Fetch the full list and publish the outcome.
    pub async fn load(&self) {
        self.state.send_replace(LoadingState::Loading);
        debug!("loading countries");

        let next = match self.repository.fetch_all_countries().await {
            Ok(countries) => {
                debug!(count = countries.len(), "countries loaded");
                LoadingState::Success(sorted_by_name(countries))
            }
            Err(err) => {
                warn!(kind = ?err.kind(), error = %err, "loading countries failed");
                LoadingState::Failure(err)
            }
        };
        self.state.send_replace(next);
    }

    /// Same as `load`: always a full re-fetch.
    pub async fn retry(&self) {
        self.load().await;
    }
}
