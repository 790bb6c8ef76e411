//! Allow-listed query parameters shared by the event-list views.
//!
//! Only the four filter keys are ever read or written here; everything else in
//! the query string belongs to someone else and is left alone.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use url::{form_urlencoded, Url};

pub const SHARED_FILTER_PARAMS: [&str; 4] = ["sort", "category", "status", "refresh_off"];

/// One of the allow-listed query keys. Variant order is serialization order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterParam {
    Sort,
    Category,
    Status,
    RefreshOff,
}

impl FilterParam {
    pub const ALL: [Self; 4] = [Self::Sort, Self::Category, Self::Status, Self::RefreshOff];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Category => "category",
            Self::Status => "status",
            Self::RefreshOff => "refresh_off",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.as_str() == key)
    }
}

impl fmt::Display for FilterParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The allow-listed params present in a URL, each with a non-empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFilterParams(BTreeMap<FilterParam, String>);

impl SharedFilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs())
    }

    /// Same as [`Self::from_url`] over a bare query string. A leading `?` is
    /// tolerated.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    // First occurrence wins, as with `URLSearchParams.get`.
    fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: Iterator<Item = (Cow<'a, str>, Cow<'a, str>)> + Clone,
    {
        let mut params = BTreeMap::new();
        for param in FilterParam::ALL {
            let first = pairs
                .clone()
                .find(|(key, _)| key == param.as_str())
                .map(|(_, value)| value);
            if let Some(value) = first.filter(|value| !value.is_empty()) {
                params.insert(param, value.into_owned());
            }
        }
        Self(params)
    }

    pub fn get(&self, param: FilterParam) -> Option<&str> {
        self.0.get(&param).map(String::as_str)
    }

    /// Stores `value` under `key` if the key is allow-listed and the value is
    /// non-empty. Returns whether anything was stored.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match FilterParam::from_key(key) {
            Some(param) if !value.is_empty() => {
                self.0.insert(param, value);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0
            .iter()
            .map(|(param, value)| (param.as_str(), value.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering in allow-list order.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl fmt::Display for SharedFilterParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

pub fn shared_filter_params(url: &Url) -> SharedFilterParams {
    SharedFilterParams::from_url(url)
}

pub fn shared_filter_params_to_string(params: &SharedFilterParams) -> String {
    params.to_query_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn ignores_unknown_keys() {
        let params = shared_filter_params(&url("https://ui.test/history?foo=bar&sort=ascending"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get(FilterParam::Sort), Some("ascending"));
    }

    #[test]
    fn omits_empty_values() {
        let params = shared_filter_params(&url("https://ui.test/history?sort=&status=pending"));
        assert_eq!(params.get(FilterParam::Sort), None);
        assert_eq!(params.get(FilterParam::Status), Some("pending"));
    }

    #[test]
    fn no_query_gives_empty_map() {
        let params = shared_filter_params(&url("https://ui.test/history"));
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn first_occurrence_wins() {
        let params = SharedFilterParams::from_query("?status=running&status=pending");
        assert_eq!(params.get(FilterParam::Status), Some("running"));
    }

    #[test]
    fn serializes_in_allow_list_order() {
        let params = shared_filter_params(&url(
            "https://ui.test/history?refresh_off=true&category=timer,signal&sort=ascending",
        ));
        assert_eq!(
            shared_filter_params_to_string(&params),
            "sort=ascending&category=timer%2Csignal&refresh_off=true"
        );
    }

    #[test]
    fn percent_encodes_values() {
        let mut params = SharedFilterParams::new();
        assert!(params.insert("category", "a b&c"));
        assert_eq!(params.to_string(), "category=a+b%26c");
    }

    #[test]
    fn insert_rejects_foreign_keys_and_empty_values() {
        let mut params = SharedFilterParams::new();
        assert!(!params.insert("page", "2"));
        assert!(!params.insert("sort", ""));
        assert!(params.is_empty());
    }

    #[test]
    fn decodes_percent_encoded_input() {
        let params = SharedFilterParams::from_query("category=timer%2Csignal");
        assert_eq!(params.get(FilterParam::Category), Some("timer,signal"));
    }

    #[test]
    fn allow_list_matches_param_keys() {
        let keys: Vec<_> = FilterParam::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(keys, SHARED_FILTER_PARAMS);
    }
}
