//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components and login forms apply identical redirect and input
//! validation behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex, PoisonError};

use eventdesk::{GuardRender, GuardVariant, RouteGuard};
use leptos::prelude::*;

use crate::state::session::RoleSession;
use crate::util::navigation::BrowserNavigator;

/// Drive a `RouteGuard` from the admin session and expose what to render.
///
/// The signal starts at `Loading`, which is also what SSR emits; the guard
/// effect only runs in the browser once the session cell changes.
pub fn install_route_guard(admin: RoleSession, variant: GuardVariant, current_path: String) -> ReadSignal<GuardRender> {
    let (render, set_render) = signal(GuardRender::Loading);
    let guard = Arc::new(Mutex::new(RouteGuard::new(variant, current_path, Arc::new(BrowserNavigator))));
    Effect::new(move || {
        let view = admin.view();
        let next = guard.lock().unwrap_or_else(PoisonError::into_inner).observe(&view);
        set_render.set(next);
    });
    render
}

/// Trim and require both login fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
