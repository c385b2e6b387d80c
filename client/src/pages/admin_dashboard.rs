//! Admin landing page at `/admin`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only inside `ProtectedRoute`, so an admin record is present
//! whenever this body is on screen.

use leptos::prelude::*;

use crate::state::session::RoleSession;

#[component]
pub fn AdminDashboardPage(admin: RoleSession) -> impl IntoView {
    let session = admin.clone();
    let email = move || session.view().record.map(|record| record.email).unwrap_or_default();

    let on_logout = move |_| admin.logout();

    view! {
        <div class="admin-dashboard">
            <header class="admin-dashboard__header">
                <h1>"Admin Dashboard"</h1>
                <span class="admin-dashboard__welcome">{move || format!("Welcome, {}", email())}</span>
                <button class="logout-button" on:click=on_logout>"Logout"</button>
            </header>
        </div>
    }
}
