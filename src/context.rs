//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::PageController;
use crate::error::ApiResult;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page controller, kept in browser-local storage since it is not `Send`
    controller: StoredValue<Rc<PageController>, LocalStorage>,
    /// True while any API request is outstanding
    pub loading: ReadSignal<bool>,
}

impl AppContext {
    pub fn new(controller: Rc<PageController>, loading: ReadSignal<bool>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            loading,
        }
    }

    pub fn controller(&self) -> Rc<PageController> {
        self.controller.get_value()
    }

    /// Run a controller action in the background, logging its failure
    pub fn dispatch<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<PageController>) -> Fut,
        Fut: Future<Output = ApiResult<()>> + 'static,
    {
        let pending = action(self.controller());
        spawn_local(async move {
            if let Err(e) = pending.await {
                log::error!("[APP] action failed: {}", e);
            }
        });
    }

    pub fn logout(&self) {
        self.controller().logout();
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
