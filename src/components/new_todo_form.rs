//! New Todo Form Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for adding a todo; the list reloads once the server accepts it
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (body, set_body) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = body.get_untracked();
        ctx.dispatch(move |controller| controller.create_todo(text));
    };

    view! {
        <form class="index__form" on:submit=create_todo>
            <input
                type="text"
                name="body"
                placeholder="Add new todo..."
                prop:value=move || body.get()
                on:input=move |ev| set_body.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
