//! URL → [`FilterState`].
//!
//! Decoding is total: anything missing or malformed falls back to the default
//! for that field and never surfaces as an error.

use tracing::warn;
use url::Url;

use crate::filter::{EventTypeCategory, FilterState, SortOrder};
use crate::params::{FilterParam, SharedFilterParams};

pub const PENDING_STATUS: &str = "pending";
pub const REFRESH_OFF_VALUE: &str = "true";

pub fn parse_event_filter_params(url: &Url) -> FilterState {
    decode_params(&SharedFilterParams::from_url(url))
}

pub fn parse_event_filter_query(query: &str) -> FilterState {
    decode_params(&SharedFilterParams::from_query(query))
}

pub fn decode_params(params: &SharedFilterParams) -> FilterState {
    FilterState {
        sort: params
            .get(FilterParam::Sort)
            .map(decode_sort)
            .unwrap_or_default(),
        categories: params.get(FilterParam::Category).map(decode_categories),
        pending_only: params.get(FilterParam::Status) == Some(PENDING_STATUS),
        auto_refresh_off: params.get(FilterParam::RefreshOff) == Some(REFRESH_OFF_VALUE),
    }
}

fn decode_sort(raw: &str) -> SortOrder {
    raw.parse().unwrap_or_else(|err| {
        warn!(%err, "ignoring sort param, using default order");
        SortOrder::default()
    })
}

// No trimming, de-duplication or validation.
fn decode_categories(raw: &str) -> Vec<EventTypeCategory> {
    raw.split(',').map(EventTypeCategory::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> FilterState {
        parse_event_filter_params(&Url::parse(s).unwrap())
    }

    #[test]
    fn no_query_decodes_to_defaults() {
        let state = decode("https://ui.test/namespaces/default/workflows/wf/run/history");
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn splits_categories_on_comma() {
        let state = decode("https://ui.test/history?category=A,B,C");
        assert_eq!(
            state.categories,
            Some(vec![
                EventTypeCategory::from("A"),
                EventTypeCategory::from("B"),
                EventTypeCategory::from("C"),
            ])
        );
    }

    #[test]
    fn categories_keep_duplicates_and_whitespace() {
        let state = parse_event_filter_query("category=timer,%20timer,timer");
        let tokens: Vec<String> = state
            .categories
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(tokens, ["timer", " timer", "timer"]);
    }

    #[test]
    fn known_categories_decode_to_variants() {
        let state = parse_event_filter_query("category=activity,local-activity");
        assert_eq!(
            state.categories,
            Some(vec![
                EventTypeCategory::Activity,
                EventTypeCategory::LocalActivity
            ])
        );
    }

    #[test]
    fn status_must_be_exactly_pending() {
        assert!(parse_event_filter_query("status=pending").pending_only);
        assert!(!parse_event_filter_query("status=Pending").pending_only);
        assert!(!parse_event_filter_query("status=running").pending_only);
    }

    #[test]
    fn refresh_off_must_be_exactly_true() {
        assert!(parse_event_filter_query("refresh_off=true").auto_refresh_off);
        assert!(!parse_event_filter_query("refresh_off=1").auto_refresh_off);
        assert!(!parse_event_filter_query("refresh_off=false").auto_refresh_off);
    }

    #[test]
    fn sort_reads_ascending() {
        assert_eq!(
            parse_event_filter_query("sort=ascending").sort,
            SortOrder::Ascending
        );
    }

    #[test]
    fn unknown_sort_falls_back_to_default() {
        assert_eq!(
            parse_event_filter_query("sort=sideways").sort,
            SortOrder::Descending
        );
    }

    #[test]
    fn empty_values_count_as_absent() {
        let state = parse_event_filter_query("sort=&category=&status=&refresh_off=");
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn from_url_delegates_to_decoder() {
        let url = Url::parse("https://ui.test/history?status=pending&refresh_off=true").unwrap();
        let state = FilterState::from_url(&url);
        assert!(state.pending_only);
        assert!(state.auto_refresh_off);
    }
}
