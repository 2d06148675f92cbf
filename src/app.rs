//! Todo Client App
//!
//! Wires gateway, session and controller together and renders the current
//! page into the root element.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{ApiClient, HttpTransport};
use crate::components::{LoginPage, TodoListPage};
use crate::config::Config;
use crate::context::AppContext;
use crate::controller::PageController;
use crate::render::Page;
use crate::session::{BrowserStorage, MemoryStorage, SessionStore, TokenStore};

#[component]
pub fn App(config: Config) -> impl IntoView {
    // State
    let page = RwSignal::new(None::<Page>);
    let (loading, set_loading) = signal(false);

    let api = Rc::new(ApiClient::new(config.api_url.clone(), Box::new(HttpTransport::new())));
    api.loading().subscribe(move |on| set_loading.set(on));

    let storage: Box<dyn TokenStore> = if BrowserStorage::is_available() {
        Box::new(BrowserStorage::new(config.token_key.clone()))
    } else {
        log::warn!("[APP] localStorage unavailable, session will not survive reloads");
        Box::new(MemoryStorage::new())
    };
    let session = SessionStore::new(storage, api.clone());
    let controller = Rc::new(PageController::new(session, api, Box::new(page)));

    // Provide context to all children
    let ctx = AppContext::new(controller, loading);
    provide_context(ctx);

    ctx.dispatch(|controller| controller.start());

    view! {
        <div class=move || if ctx.loading.get() { "root root--loading" } else { "root" }>
            {move || page.get().map(|page| match page {
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::List(items) => view! { <TodoListPage items=items /> }.into_any(),
            })}
        </div>
    }
}
