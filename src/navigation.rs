//! Client-side navigation seam.
//!
//! The encoder never touches the browser directly. It hands the new URL to a
//! [`Navigate`] implementation: the Crux shell via
//! [`crate::capabilities::Navigator`], the in-memory [`HistoryNavigator`] for
//! hosts without a browser, or a stub in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, instrument};
use url::Url;

use crate::config::SyncConfig;
use crate::encode::encode_filter_update;
use crate::filter::FilterUpdate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigateOptions {
    /// Overwrite the current history entry instead of pushing a new one.
    pub replace_state: bool,
    pub keep_focus: bool,
    pub no_scroll: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            replace_state: false,
            keep_focus: true,
            no_scroll: true,
        }
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationError {
    #[error("navigation rejected: {reason}")]
    Rejected { reason: String },

    #[error("invalid navigation target: {url}")]
    InvalidTarget { url: String },

    #[error("navigation unavailable")]
    Unavailable,
}

pub type NavigateResult = Result<(), NavigationError>;

#[async_trait]
pub trait Navigate: Send + Sync {
    /// Transition to `target` without a full reload.
    async fn navigate(&self, target: &Url, options: &NavigateOptions) -> NavigateResult;
}

/// Encodes `update` onto `url`, navigates there and returns the new URL.
///
/// All touched keys change in a single navigation. Navigation failures are
/// returned as-is.
#[instrument(level = "debug", skip_all, fields(from = %url))]
pub async fn update_event_filter_params<N>(
    url: &Url,
    update: &FilterUpdate,
    navigator: &N,
    options: &NavigateOptions,
) -> Result<Url, NavigationError>
where
    N: Navigate + ?Sized,
{
    let next = encode_filter_update(url, update);
    debug!(to = %next, "navigating to updated filter params");
    navigator.navigate(&next, options).await?;
    Ok(next)
}

struct History {
    entries: Vec<Url>,
    cursor: usize,
}

/// Bounded in-memory history stack, for hosts that have no browser router.
pub struct HistoryNavigator {
    history: Mutex<History>,
    max_entries: usize,
}

impl HistoryNavigator {
    pub fn new(initial: Url, max_entries: usize) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![initial],
                cursor: 0,
            }),
            max_entries: max_entries.max(1),
        }
    }

    pub fn with_config(initial: Url, config: &SyncConfig) -> Self {
        Self::new(initial, config.max_history_entries)
    }

    pub async fn current(&self) -> Url {
        let history = self.history.lock().await;
        history.entries[history.cursor].clone()
    }

    pub async fn entries(&self) -> Vec<Url> {
        self.history.lock().await.entries.clone()
    }

    pub async fn back(&self) -> Option<Url> {
        let mut history = self.history.lock().await;
        history.cursor = history.cursor.checked_sub(1)?;
        Some(history.entries[history.cursor].clone())
    }

    pub async fn forward(&self) -> Option<Url> {
        let mut history = self.history.lock().await;
        if history.cursor + 1 >= history.entries.len() {
            return None;
        }
        history.cursor += 1;
        Some(history.entries[history.cursor].clone())
    }
}

#[async_trait]
impl Navigate for HistoryNavigator {
    async fn navigate(&self, target: &Url, options: &NavigateOptions) -> NavigateResult {
        let mut history = self.history.lock().await;
        let cursor = history.cursor;

        if history.entries[cursor].origin() != target.origin() {
            return Err(NavigationError::InvalidTarget {
                url: target.to_string(),
            });
        }

        if options.replace_state {
            history.entries[cursor] = target.clone();
        } else {
            history.entries.truncate(cursor + 1);
            history.entries.push(target.clone());
            history.cursor += 1;

            let overflow = history.entries.len().saturating_sub(self.max_entries);
            if overflow > 0 {
                history.entries.drain(..overflow);
                history.cursor -= overflow;
            }
        }

        debug!(
            target = %target,
            depth = history.entries.len(),
            replace = options.replace_state,
            "history updated"
        );
        Ok(())
    }
}
