use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

use crate::navigation::{NavigateOptions, NavigateResult};

/// Asks the shell to move the address bar to `url` without reloading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigateOperation {
    pub url: String,
    pub options: NavigateOptions,
}

impl Operation for NavigateOperation {
    type Output = NavigateResult;
}

pub struct Navigator<Ev> {
    context: CapabilityContext<NavigateOperation, Ev>,
}

impl<Ev> Capability<Ev> for Navigator<Ev> {
    type Operation = NavigateOperation;
    type MappedSelf<MappedEv> = Navigator<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Navigator::new(self.context.map_event(f))
    }
}

impl<Ev> Navigator<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<NavigateOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn navigate<F>(&self, url: impl Into<String>, options: NavigateOptions, make_event: F)
    where
        F: FnOnce(NavigateResult) -> Ev + Send + 'static,
    {
        let operation = NavigateOperation {
            url: url.into(),
            options,
        };
        let context = self.context.clone();
        self.context.spawn(async move {
            let result = context.request_from_shell(operation).await;
            context.update_app(make_event(result));
        });
    }
}
