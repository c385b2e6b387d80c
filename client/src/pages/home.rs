//! Public landing page with end-user sign-in.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::login_modal::LoginModal;
use crate::state::session::RoleSession;

#[component]
pub fn HomePage(user: RoleSession) -> impl IntoView {
    let show_login = RwSignal::new(false);

    let status_session = user.clone();
    let signed_in_email = move || status_session.view().record.map(|record| record.email);

    let logout_session = user.clone();
    let on_logout = move |_| logout_session.logout();

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"EventDesk"</h1>
                {move || match signed_in_email() {
                    Some(email) => view! {
                        <div class="home-header__session">
                            <span>{format!("Signed in as {email}")}</span>
                            <button class="logout-button" on:click=on_logout.clone()>"Logout"</button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <button class="login-button" on:click=move |_| show_login.set(true)>"Sign in"</button>
                    }
                    .into_any(),
                }}
                <a class="home-header__admin" href="/admin">"Admin"</a>
            </header>
            <LoginModal user=user open=show_login/>
        </div>
    }
}
