use serde::{Deserialize, Serialize};

use crate::navigation::NavigateOptions;

pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Options passed along with every filter navigation.
    pub navigate: NavigateOptions,
    /// Upper bound on entries kept by [`crate::navigation::HistoryNavigator`].
    pub max_history_entries: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            navigate: NavigateOptions::default(),
            max_history_entries: DEFAULT_MAX_HISTORY_ENTRIES,
        }
    }
}

impl SyncConfig {
    /// Filter edits overwrite the current history entry instead of adding one.
    #[must_use]
    pub fn replacing_history(mut self) -> Self {
        self.navigate.replace_state = true;
        self
    }
}
