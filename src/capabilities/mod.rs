//! Shell-side effects requested by the core.
//!
//! Two effects cross the boundary: `Render` after any model change, and
//! `Navigator` when the filters need a new address-bar URL. The shell answers
//! the latter with its router's result.

mod navigator;

pub use self::navigator::{NavigateOperation, Navigator};
pub use crux_core::render::Render;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub render: Render<Event>,
    pub navigator: Navigator<Event>,
}

#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    use super::{App, Effect};

    pub type AppTester = crux_core::testing::AppTester<App, Effect>;
}
