//! View Renderer
//!
//! The page currently shown in the single mount point.

use std::rc::Rc;

use leptos::prelude::*;

use crate::models::TodoItem;

/// One full screen. Rebuilt from scratch on every render.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Login,
    List(Vec<TodoItem>),
}

/// Mount point that replaces its whole content on every render
pub trait Mount {
    fn render(&self, page: Page);
}

impl<M: Mount + ?Sized> Mount for Rc<M> {
    fn render(&self, page: Page) {
        (**self).render(page)
    }
}

/// The app root renders whatever page this signal holds, rebuilding the
/// subtree each time it is set.
impl Mount for RwSignal<Option<Page>> {
    fn render(&self, page: Page) {
        self.set(Some(page));
    }
}
