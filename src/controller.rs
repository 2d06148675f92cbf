//! Page Controllers
//!
//! Decides which page is shown and redraws it from the server after every
//! action. State machine:
//!
//! - Unauthenticated: Login page. Successful login moves to Authenticated.
//! - Authenticated: List page. Every mutation re-enters through a full list
//!   reload; logout (or a 401 from the API) returns to Unauthenticated.
//!
//! Two counters keep late responses from acting on a page that is gone:
//!
//! - `epoch` changes only when the page kind changes (Login to List or back).
//!   Login and mutation results are dropped if it moved while they were in
//!   flight, errors included.
//! - `fetch_seq` changes on every list fetch. A list is rendered only by the
//!   newest fetch of the current epoch.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{Credentials, NewTodo, TodoItem};
use crate::render::{Mount, Page};
use crate::session::SessionStore;

pub struct PageController {
    session: SessionStore,
    api: Rc<ApiClient>,
    mount: Box<dyn Mount>,
    epoch: Cell<u64>,
    fetch_seq: Cell<u64>,
}

impl PageController {
    pub fn new(session: SessionStore, api: Rc<ApiClient>, mount: Box<dyn Mount>) -> Self {
        Self {
            session,
            api,
            mount,
            epoch: Cell::new(0),
            fetch_seq: Cell::new(0),
        }
    }

    /// Pick the first page from the persisted session
    pub async fn start(self: Rc<Self>) -> ApiResult<()> {
        match self.session.load() {
            Some(token) => {
                log::info!("[APP] restoring saved session");
                self.enter_list(&token).await
            }
            None => {
                self.show_login();
                Ok(())
            }
        }
    }

    // ========================
    // Login
    // ========================

    pub fn show_login(&self) {
        self.next_epoch();
        self.mount.render(Page::Login);
    }

    pub async fn submit_login(self: Rc<Self>, credentials: Credentials) -> ApiResult<()> {
        let epoch = self.epoch.get();
        let token = self.api.login(&credentials).await?;
        if !self.is_current_epoch(epoch) {
            log::debug!("[APP] login answered after the page changed, ignoring");
            return Ok(());
        }
        self.enter_list(&token).await
    }

    pub fn logout(&self) {
        self.session.logout();
        self.show_login();
    }

    // ========================
    // List
    // ========================

    async fn enter_list(self: Rc<Self>, token: &str) -> ApiResult<()> {
        self.session.login(token);
        self.next_epoch();
        self.show_list().await
    }

    /// Fetch all todos and render them in one go
    pub async fn show_list(self: Rc<Self>) -> ApiResult<()> {
        let epoch = self.epoch.get();
        let seq = self.fetch_seq.get() + 1;
        self.fetch_seq.set(seq);

        let result = self.api.list_todos().await;
        if !self.is_current_epoch(epoch) || self.fetch_seq.get() != seq {
            log::debug!("[APP] discarding stale todo list (fetch {})", seq);
            return Ok(());
        }
        let items = self.guard_session(result)?;
        log::debug!("[APP] rendering {} todos", items.len());
        self.mount.render(Page::List(items));
        Ok(())
    }

    pub async fn create_todo(self: Rc<Self>, body: String) -> ApiResult<()> {
        let epoch = self.epoch.get();
        let result = self.api.create_todo(&NewTodo::new(body)).await;
        self.reload_after(epoch, result).await
    }

    // ========================
    // Item row
    // ========================

    /// Ask the server to flip completion; the row only changes after reload
    pub async fn toggle_todo(self: Rc<Self>, item: TodoItem) -> ApiResult<()> {
        let epoch = self.epoch.get();
        let result = self.api.set_todo_complete(&item.id, !item.complete).await;
        self.reload_after(epoch, result).await
    }

    pub async fn remove_todo(self: Rc<Self>, item: TodoItem) -> ApiResult<()> {
        let epoch = self.epoch.get();
        let result = self.api.delete_todo(&item.id).await;
        self.reload_after(epoch, result).await
    }

    // ========================
    // Helpers
    // ========================

    async fn reload_after(self: Rc<Self>, epoch: u64, result: ApiResult<()>) -> ApiResult<()> {
        if !self.is_current_epoch(epoch) {
            log::debug!("[APP] page changed while mutation was in flight, skipping reload");
            return Ok(());
        }
        self.guard_session(result)?;
        self.show_list().await
    }

    /// A 401 means the token is no good anymore: drop it and go back to login
    fn guard_session<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(e) = &result {
            if e.is_unauthorized() && self.session.is_authenticated() {
                log::warn!("[APP] session rejected by server, logging out");
                self.logout();
            }
        }
        result
    }

    fn next_epoch(&self) {
        self.epoch.set(self.epoch.get() + 1);
    }

    fn is_current_epoch(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }
}
