//! Email login page with the offer to register an unknown address.

use leptos::prelude::*;

use crate::app::AppServices;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::config::TASKS_PATH;
use crate::net::auth::{LoginOutcome, classify_login};
use crate::util::validation::validate_email;

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = StoredValue::new(expect_context::<AppServices>());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    // Email waiting for the user to accept registration.
    let pending_register = RwSignal::new(None::<String>);

    if services.with_value(|s| s.auth.is_logged_in()) {
        services.with_value(|s| s.navigator.navigate(TASKS_PATH));
    }

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let services = services.get_value();
        leptos::task::spawn_local(async move {
            match classify_login(services.auth.login(&email_value).await) {
                LoginOutcome::Authenticated(resp) => {
                    if services.auth.save_session(&resp) {
                        services.navigator.navigate(TASKS_PATH);
                        return;
                    }
                    info.set("Login failed: incomplete response from server.".to_owned());
                }
                LoginOutcome::UnknownAccount => {
                    info.set(String::new());
                    pending_register.set(Some(email_value));
                }
                LoginOutcome::Failed(err) => {
                    leptos::logging::warn!("login failed: {err}");
                    info.set(format!("Login failed: {err}"));
                }
            }
            busy.set(false);
        });
    };

    let on_register = Callback::new(move |()| {
        let Some(email_value) = pending_register.get_untracked() else {
            return;
        };
        pending_register.set(None);
        busy.set(true);
        info.set("Creating account...".to_owned());

        let services = services.get_value();
        leptos::task::spawn_local(async move {
            match services.auth.register(&email_value).await {
                Ok(resp) if services.auth.save_session(&resp) => {
                    services.navigator.navigate(TASKS_PATH);
                    return;
                }
                Ok(_) => info.set("Registration failed: incomplete response from server.".to_owned()),
                Err(err) => {
                    leptos::logging::warn!("registration failed: {err}");
                    info.set(format!("Registration failed: {err}"));
                }
            }
            busy.set(false);
        });
    });

    let on_decline = Callback::new(move |()| {
        pending_register.set(None);
        info.set("No account found for this email.".to_owned());
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sticky Tasks"</h1>
                <p class="login-card__subtitle">"Sign in with your email"</p>
                <form class="login-form" on:submit=on_login>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
            <Show when=move || pending_register.get().is_some()>
                <ConfirmDialog
                    title="Create account?"
                    message="No account exists for this email. Register a new one?"
                    confirm_label="Register"
                    on_confirm=on_register
                    on_cancel=on_decline
                />
            </Show>
        </div>
    }
}
