use tracing::{debug, warn};
use url::Url;

use crate::capabilities::Capabilities;
use crate::encode::encode_filter_update;
use crate::event::Event;
use crate::filter::FilterUpdate;
use crate::model::{Model, ViewModel};
use crate::navigation::NavigateResult;

#[derive(Default)]
pub struct App;

impl App {
    fn request_filters(update: &FilterUpdate, model: &mut Model, caps: &Capabilities) {
        if update.is_empty() {
            return;
        }
        let Some(current) = model.location.as_ref() else {
            warn!("filter update before the shell reported a location, ignoring");
            return;
        };

        let next = encode_filter_update(current, update);
        debug!(from = %current, to = %next, "requesting filter navigation");

        let target = next.to_string();
        caps.navigator
            .navigate(target.clone(), model.config.navigate, move |result| {
                Event::NavigationFinished { target, result }
            });

        model.pending = Some(next);
        model.navigating = true;
        model.last_error = None;
        caps.render.render();
    }

    fn finish_navigation(target: &str, result: NavigateResult, model: &mut Model) {
        let target = Url::parse(target).ok();

        // Completions can arrive out of order; whichever lands last wins.
        match (result, target.clone()) {
            (Ok(()), Some(url)) => model.set_location(url),
            (Ok(()), None) => warn!("navigation finished for an unparseable target"),
            (Err(err), _) => model.last_error = Some(err),
        }

        if model.pending.is_none() || model.pending == target {
            model.pending = None;
            model.navigating = false;
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(
            event = event.name(),
            user_initiated = event.is_user_initiated(),
            "update"
        );

        match event {
            Event::LocationChanged { url } => {
                match Url::parse(&url) {
                    Ok(url) => model.set_location(url),
                    Err(err) => {
                        warn!(%err, "unparseable location, filters back to defaults");
                        model.clear_location();
                    }
                }
                caps.render.render();
            }

            Event::FiltersChanged(update) => Self::request_filters(&update, model, caps),

            Event::FiltersReset => Self::request_filters(&FilterUpdate::reset_all(), model, caps),

            Event::NavigationFinished { target, result } => {
                Self::finish_navigation(&target, result, model);
                caps.render.render();
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::testing::AppTester;
    use crate::capabilities::Effect;
    use crate::filter::SortOrder;
    use crate::navigation::NavigationError;

    const LIST: &str = "https://ui.test/namespaces/default/workflows/wf/run/history";

    fn at(url: &str) -> (AppTester, Model) {
        let app = AppTester::default();
        let mut model = Model::default();
        app.update(Event::LocationChanged { url: url.into() }, &mut model);
        (app, model)
    }

    #[test]
    fn request_records_pending_target() {
        let (app, mut model) = at(LIST);
        model.last_error = Some(NavigationError::Unavailable);

        let update = app.update(
            Event::FiltersChanged(FilterUpdate::new().with_sort(SortOrder::Ascending)),
            &mut model,
        );

        assert!(model.navigating);
        assert!(model.last_error.is_none());
        assert_eq!(
            model.pending.as_ref().map(Url::as_str),
            Some("https://ui.test/namespaces/default/workflows/wf/run/history?sort=ascending")
        );
        assert!(update
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::Navigator(_))));
    }

    #[test]
    fn stale_completion_leaves_newer_request_pending() {
        let (app, mut model) = at(LIST);
        app.update(
            Event::FiltersChanged(FilterUpdate::new().with_pending_only(true)),
            &mut model,
        );
        let newer = model.pending.clone();

        app.update(
            Event::NavigationFinished {
                target: format!("{LIST}?sort=ascending"),
                result: Ok(()),
            },
            &mut model,
        );

        assert!(model.navigating);
        assert_eq!(model.pending, newer);
        assert_eq!(model.filters.sort, SortOrder::Ascending);
    }

    #[test]
    fn view_mirrors_model() {
        let (app, model) = at(&format!("{LIST}?status=pending&page=2"));
        let view = app.view(&model);

        assert!(view.pending_only);
        assert_eq!(view.shared_params, "status=pending");
        assert!(!view.navigating);
    }
}
