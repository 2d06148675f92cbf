//! Todo Row Component
//!
//! One item in the list. Rows never change themselves: every action goes to
//! the server and the whole list is reloaded afterwards.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::TodoItem;

fn row_class(item: &TodoItem) -> &'static str {
    if item.complete { "todo-item todo-item--complete" } else { "todo-item" }
}

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_app_context();

    let class = row_class(&item);
    let complete = item.complete;
    let body = item.body.clone();
    let toggled = item.clone();
    let removed = item;

    view! {
        <li class=class>
            <input
                type="checkbox"
                class="todo-item__checkbox"
                prop:checked=complete
                on:click=move |ev| {
                    // Server decides; the reload paints the new state
                    ev.prevent_default();
                    let item = toggled.clone();
                    ctx.dispatch(move |controller| controller.toggle_todo(item));
                }
            />
            <span class="todo-item__body">{body}</span>
            <button
                class="todo-item__remove-btn"
                on:click=move |_| {
                    let item = removed.clone();
                    ctx.dispatch(move |controller| controller.remove_todo(item));
                }
            >
                "×"
            </button>
        </li>
    }
}
