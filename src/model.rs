use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::SyncConfig;
use crate::filter::{FilterState, SortOrder};
use crate::navigation::NavigationError;
use crate::params::SharedFilterParams;

/// Core state. `filters` is always whatever `location` decodes to; it is
/// never edited directly.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Model {
    pub location: Option<Url>,
    pub filters: FilterState,

    // Navigation in flight
    pub pending: Option<Url>,
    pub navigating: bool,
    pub last_error: Option<NavigationError>,

    pub config: SyncConfig,
}

impl Model {
    pub fn with_config(config: SyncConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Adopts `url` as the current location and re-derives the filters.
    pub fn set_location(&mut self, url: Url) {
        self.filters = FilterState::from_url(&url);
        self.location = Some(url);
    }

    pub fn clear_location(&mut self) {
        self.location = None;
        self.filters = FilterState::default();
    }

    pub fn shared_params(&self) -> SharedFilterParams {
        self.location
            .as_ref()
            .map(SharedFilterParams::from_url)
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub sort: SortOrder,
    /// `None` when every category is shown.
    pub categories: Option<Vec<String>>,
    pub pending_only: bool,
    pub auto_refresh_off: bool,
    /// Allow-listed params as a query string, for links that should keep the
    /// current filters.
    pub shared_params: String,
    pub navigating: bool,
    pub error: Option<String>,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let filters = &model.filters;
        Self {
            sort: filters.sort,
            categories: filters
                .categories
                .as_ref()
                .map(|categories| categories.iter().map(ToString::to_string).collect()),
            pending_only: filters.pending_only,
            auto_refresh_off: filters.auto_refresh_off,
            shared_params: model.shared_params().to_query_string(),
            navigating: model.navigating,
            error: model.last_error.as_ref().map(ToString::to_string),
        }
    }
}
