//! End-user sign-in modal.

use leptos::prelude::*;

use crate::state::session::RoleSession;
use crate::util::auth::validate_login_input;

#[component]
pub fn LoginModal(user: RoleSession, open: RwSignal<bool>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let user = user.clone();
            leptos::task::spawn_local(async move {
                match user.try_login(&email_value, &password_value).await {
                    Ok(_) => {
                        password.set(String::new());
                        open.set(false);
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&user, email_value, password_value);
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-card">
                    <button class="modal-card__close" on:click=move |_| open.set(false)>"✕"</button>
                    <h2>"Login"</h2>
                    <p class="modal-card__subtitle">"Sign in"</p>
                    <form class="login-form" on:submit=on_submit.clone()>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || error.get().is_some()>
                            <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
