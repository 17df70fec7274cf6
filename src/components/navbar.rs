//! Top bar of the task page: brand, search box, signed-in user and logout.

use leptos::prelude::*;

#[component]
pub fn Navbar(
    email: Option<String>,
    on_search: Callback<String>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let has_email = email.is_some();
    view! {
        <header class="navbar toolbar">
            <span class="navbar__brand">"TASKS"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <input
                class="navbar__search"
                type="search"
                placeholder="Search notes..."
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            <span class="toolbar__spacer"></span>
            <Show when=move || has_email>
                <span class="navbar__user">{email.clone().unwrap_or_default()}</span>
                <button class="btn toolbar__logout" on:click=move |_| on_logout.run(()) title="Log out">
                    "Log out"
                </button>
            </Show>
        </header>
    }
}
