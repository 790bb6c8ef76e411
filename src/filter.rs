use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use url::Url;

/// Order in which history events are listed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort order: {0:?}")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}

/// Category of a workflow history event, as written in the `category` param.
///
/// Tokens outside the known set are kept verbatim so they survive a
/// decode/encode cycle untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EventTypeCategory {
    Activity,
    ChildWorkflow,
    Signal,
    Timer,
    Update,
    Workflow,
    Nexus,
    Marker,
    LocalActivity,
    Other,
    Unrecognized(String),
}

impl EventTypeCategory {
    pub const KNOWN: [Self; 10] = [
        Self::Activity,
        Self::ChildWorkflow,
        Self::Signal,
        Self::Timer,
        Self::Update,
        Self::Workflow,
        Self::Nexus,
        Self::Marker,
        Self::LocalActivity,
        Self::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Activity => "activity",
            Self::ChildWorkflow => "child-workflow",
            Self::Signal => "signal",
            Self::Timer => "timer",
            Self::Update => "update",
            Self::Workflow => "workflow",
            Self::Nexus => "nexus",
            Self::Marker => "marker",
            Self::LocalActivity => "local-activity",
            Self::Other => "other",
            Self::Unrecognized(token) => token,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl FromStr for EventTypeCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for EventTypeCategory {
    fn from(token: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == token)
            .unwrap_or_else(|| Self::Unrecognized(token.to_string()))
    }
}

impl From<String> for EventTypeCategory {
    fn from(token: String) -> Self {
        match Self::from(token.as_str()) {
            Self::Unrecognized(_) => Self::Unrecognized(token),
            known => known,
        }
    }
}

impl From<EventTypeCategory> for String {
    fn from(category: EventTypeCategory) -> Self {
        match category {
            EventTypeCategory::Unrecognized(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter, sort and refresh choices for the event list.
///
/// Always derived from the current URL; a field only shows up in the query
/// string when it differs from its default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub sort: SortOrder,
    /// `None` means no category filter is applied.
    pub categories: Option<Vec<EventTypeCategory>>,
    pub pending_only: bool,
    pub auto_refresh_off: bool,
}

impl FilterState {
    pub fn from_url(url: &Url) -> Self {
        crate::decode::parse_event_filter_params(url)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Per-field edit: leave alone, put back to default, or set a value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUpdate<T> {
    #[default]
    Unset,
    Reset,
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset | Self::Reset => None,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Reset, Self::Set)
    }
}

/// A partial change to [`FilterState`]. Untouched fields keep whatever the
/// URL currently says.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterUpdate {
    pub sort: FieldUpdate<SortOrder>,
    pub categories: FieldUpdate<Vec<EventTypeCategory>>,
    pub pending_only: FieldUpdate<bool>,
    pub auto_refresh_off: FieldUpdate<bool>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field explicitly back to its default.
    pub fn reset_all() -> Self {
        Self {
            sort: FieldUpdate::Reset,
            categories: FieldUpdate::Reset,
            pending_only: FieldUpdate::Reset,
            auto_refresh_off: FieldUpdate::Reset,
        }
    }

    /// Touches every field with the values of `state`.
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            sort: FieldUpdate::Set(state.sort),
            categories: state.categories.clone().into(),
            pending_only: FieldUpdate::Set(state.pending_only),
            auto_refresh_off: FieldUpdate::Set(state.auto_refresh_off),
        }
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = FieldUpdate::Set(sort);
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: Option<Vec<EventTypeCategory>>) -> Self {
        self.categories = categories.into();
        self
    }

    #[must_use]
    pub fn with_pending_only(mut self, pending_only: bool) -> Self {
        self.pending_only = FieldUpdate::Set(pending_only);
        self
    }

    #[must_use]
    pub fn with_auto_refresh_off(mut self, off: bool) -> Self {
        self.auto_refresh_off = FieldUpdate::Set(off);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.sort.is_unset()
            && self.categories.is_unset()
            && self.pending_only.is_unset()
            && self.auto_refresh_off.is_unset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_parses_wire_tokens() {
        assert_eq!("ascending".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!("descending".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert!("Ascending".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    }

    #[test]
    fn category_tokens_survive_conversion() {
        assert_eq!(
            EventTypeCategory::from("child-workflow"),
            EventTypeCategory::ChildWorkflow
        );
        let odd = EventTypeCategory::from("A");
        assert!(!odd.is_known());
        assert_eq!(odd.to_string(), "A");
        assert_eq!(String::from(EventTypeCategory::LocalActivity), "local-activity");
    }

    #[test]
    fn category_serializes_as_token() {
        let json = serde_json::to_string(&vec![
            EventTypeCategory::Timer,
            EventTypeCategory::from("custom"),
        ])
        .unwrap();
        assert_eq!(json, r#"["timer","custom"]"#);
    }

    #[test]
    fn default_state_is_descending_and_unfiltered() {
        let state = FilterState::default();
        assert_eq!(state.sort, SortOrder::Descending);
        assert_eq!(state.categories, None);
        assert!(!state.pending_only);
        assert!(!state.auto_refresh_off);
        assert!(state.is_default());
    }

    #[test]
    fn update_builders_touch_only_named_fields() {
        let update = FilterUpdate::new().with_pending_only(true);
        assert_eq!(update.pending_only, FieldUpdate::Set(true));
        assert!(update.sort.is_unset());
        assert!(update.categories.is_unset());
        assert!(!update.is_empty());
        assert!(FilterUpdate::new().is_empty());
    }

    #[test]
    fn none_categories_become_reset() {
        let update = FilterUpdate::new().with_categories(None);
        assert_eq!(update.categories, FieldUpdate::Reset);
    }
}
