//! Todo List Page Component
//!
//! New-item form, logout button and one row per todo, in server order.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoRow};
use crate::context::use_app_context;
use crate::models::TodoItem;

#[component]
pub fn TodoListPage(items: Vec<TodoItem>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="index">
            <NewTodoForm />
            <button class="index__logout-btn" on:click=move |_| ctx.logout()>"Log out"</button>
            <ul class="index__todo-list">
                {items.into_iter().map(|item| view! { <TodoRow item=item /> }).collect_view()}
            </ul>
        </div>
    }
}
