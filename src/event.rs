use serde::{Deserialize, Serialize};

use crate::filter::FilterUpdate;
use crate::navigation::NavigateResult;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    // Shell → core: the address bar now shows `url` (load, back/forward,
    // or a navigation we asked for).
    LocationChanged {
        url: String,
    },

    // Filter edits from the event-list controls
    FiltersChanged(FilterUpdate),
    FiltersReset,

    // Capability responses
    NavigationFinished {
        target: String,
        result: NavigateResult,
    },
}

impl Event {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LocationChanged { .. } => "location_changed",
            Self::FiltersChanged(_) => "filters_changed",
            Self::FiltersReset => "filters_reset",
            Self::NavigationFinished { .. } => "navigation_finished",
        }
    }

    pub const fn is_user_initiated(&self) -> bool {
        matches!(self, Self::FiltersChanged(_) | Self::FiltersReset)
    }
}
