//! Login Form Component
//!
//! Posts the credentials form-encoded; reloads on success, shows the server's message on failure.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;

#[component]
pub fn LoginForm() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            match commands::login(&username, &password).await {
                Ok(()) => reload_page(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[AUTH] Error: {}", e).into());
                    set_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <form id="login-form" class="login-form" on:submit=submit>
            <div
                id="error-container"
                class="error-container"
                style:display=move || if error.get().is_some() { "block" } else { "none" }
            >
                <p id="error-message">{move || error.get().unwrap_or_default()}</p>
            </div>
            <label for="username">"Username"</label>
            <input
                id="username"
                name="username"
                type="text"
                required
                prop:value=username
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <label for="password">"Password"</label>
            <input
                id="password"
                name="password"
                type="password"
                required
                prop:value=password
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Log In"</button>
        </form>
    }
}

/// The server has set the session cookie; let it render the edit page
fn reload_page() {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().reload() {
        web_sys::console::error_2(&"[AUTH] Reload failed:".into(), &e);
    }
}
