//! Login Page Component
//!
//! Username/password form. A successful login swaps in the todo list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Credentials;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        ctx.dispatch(move |controller| controller.submit_login(credentials));
    };

    view! {
        <div class="login">
            <form class="login__form" on:submit=submit>
                <input
                    type="text"
                    name="username"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit">"Log in"</button>
            </form>
        </div>
    }
}
