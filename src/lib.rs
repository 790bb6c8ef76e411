// lib.rs - event-list filter state, synced with the address bar

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod decode;
pub mod encode;
pub mod event;
pub mod filter;
pub mod model;
pub mod navigation;
pub mod params;
pub mod time;
pub mod workflow;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

pub use app::App;
pub use capabilities::{Capabilities, Effect, NavigateOperation, Navigator};
pub use config::SyncConfig;
pub use crux_core::{render::Render, App as CruxApp};
pub use decode::parse_event_filter_params;
pub use encode::{apply_instructions, encode_filter_update, filter_instructions, ParamInstruction};
pub use event::Event;
pub use filter::{EventTypeCategory, FieldUpdate, FilterState, FilterUpdate, SortOrder};
pub use model::{Model, ViewModel};
pub use navigation::{
    update_event_filter_params, HistoryNavigator, Navigate, NavigateOptions, NavigateResult,
    NavigationError,
};
pub use params::{
    shared_filter_params, shared_filter_params_to_string, FilterParam, SharedFilterParams,
    SHARED_FILTER_PARAMS,
};
pub use time::to_time_difference;
pub use workflow::{is_cancel_in_progress, WorkflowEvent, WorkflowStatus};
