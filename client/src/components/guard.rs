//! Admin route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AdminLayout` wraps every `/admin` route, the login view included;
//! `ProtectedRoute` wraps individual admin pages. Both render a spinner until
//! the admin session has been read from storage, then either their children
//! or nothing while the login redirect is in flight.

use eventdesk::{GuardRender, GuardVariant};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_location;

use crate::state::session::RoleSession;
use crate::util::auth::install_route_guard;

/// Neutral "checking authentication" indicator.
#[component]
pub fn AuthLoading() -> impl IntoView {
    view! {
        <div class="auth-loading">
            <div class="auth-loading__spinner"></div>
            <p class="auth-loading__text">"Checking authentication..."</p>
        </div>
    }
}

fn guarded(render: ReadSignal<GuardRender>, children: ChildrenFn) -> impl IntoView {
    move || match render.get() {
        GuardRender::Loading => view! { <AuthLoading/> }.into_any(),
        GuardRender::Nothing => ().into_any(),
        GuardRender::Children => children().into_any(),
    }
}

/// Render `children` only for an authenticated admin.
#[component]
pub fn ProtectedRoute(admin: RoleSession, children: ChildrenFn) -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    let render = install_route_guard(admin, GuardVariant::Route, path);
    guarded(render, children)
}

/// Admin section wrapper that leaves `/admin/login` reachable.
#[component]
pub fn AdminLayout(admin: RoleSession, children: ChildrenFn) -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    let render = install_route_guard(admin, GuardVariant::Layout, path);
    view! { <div class="admin-layout">{guarded(render, children)}</div> }
}
