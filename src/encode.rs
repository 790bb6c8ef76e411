//! [`FilterUpdate`] → query-string edits → new URL.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::decode::{PENDING_STATUS, REFRESH_OFF_VALUE};
use crate::filter::{EventTypeCategory, FieldUpdate, FilterUpdate, SortOrder};
use crate::params::FilterParam;

/// A single edit to one allow-listed query key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamInstruction {
    Set { key: FilterParam, value: String },
    Remove { key: FilterParam },
}

impl ParamInstruction {
    pub const fn key(&self) -> FilterParam {
        match self {
            Self::Set { key, .. } | Self::Remove { key } => *key,
        }
    }

    fn set_or_remove(key: FilterParam, value: Option<String>) -> Self {
        match value {
            Some(value) => Self::Set { key, value },
            None => Self::Remove { key },
        }
    }
}

/// Instructions for every touched field, in allow-list order. Values equal to
/// the default turn into removals.
pub fn filter_instructions(update: &FilterUpdate) -> Vec<ParamInstruction> {
    let mut instructions = Vec::with_capacity(4);

    if let Some(value) = resolve(&update.sort, |sort| {
        (*sort != SortOrder::default()).then(|| sort.to_string())
    }) {
        instructions.push(ParamInstruction::set_or_remove(FilterParam::Sort, value));
    }

    if let Some(value) = resolve(&update.categories, |categories| {
        let joined = join_categories(categories);
        (!joined.is_empty()).then_some(joined)
    }) {
        instructions.push(ParamInstruction::set_or_remove(FilterParam::Category, value));
    }

    if let Some(value) = resolve(&update.pending_only, |pending| {
        pending.then(|| PENDING_STATUS.to_string())
    }) {
        instructions.push(ParamInstruction::set_or_remove(FilterParam::Status, value));
    }

    if let Some(value) = resolve(&update.auto_refresh_off, |off| {
        off.then(|| REFRESH_OFF_VALUE.to_string())
    }) {
        instructions.push(ParamInstruction::set_or_remove(FilterParam::RefreshOff, value));
    }

    instructions
}

// Outer None: field untouched. Inner None: remove the key.
fn resolve<T>(
    field: &FieldUpdate<T>,
    encode: impl FnOnce(&T) -> Option<String>,
) -> Option<Option<String>> {
    match field {
        FieldUpdate::Unset => None,
        FieldUpdate::Reset => Some(None),
        FieldUpdate::Set(value) => Some(encode(value)),
    }
}

fn join_categories(categories: &[EventTypeCategory]) -> String {
    categories
        .iter()
        .map(EventTypeCategory::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Applies all instructions to a copy of `url` in one go.
///
/// `Set` overwrites the first occurrence of its key in place and drops any
/// later duplicates, appending when the key is missing. `Remove` drops every
/// occurrence. Other pairs, the path and the fragment are left as they are.
pub fn apply_instructions(url: &Url, instructions: &[ParamInstruction]) -> Url {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    for instruction in instructions {
        let key = instruction.key().as_str();
        match instruction {
            ParamInstruction::Set { value, .. } => {
                let mut seen = false;
                pairs.retain_mut(|(k, v)| {
                    if k.as_str() != key {
                        return true;
                    }
                    if seen {
                        return false;
                    }
                    seen = true;
                    v.clone_from(value);
                    true
                });
                if !seen {
                    pairs.push((key.to_string(), value.clone()));
                }
            }
            ParamInstruction::Remove { .. } => pairs.retain(|(k, _)| k.as_str() != key),
        }
    }

    let mut next = url.clone();
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut().clear().extend_pairs(&pairs);
    }
    next
}

pub fn encode_filter_update(url: &Url, update: &FilterUpdate) -> Url {
    apply_instructions(url, &filter_instructions(update))
}
