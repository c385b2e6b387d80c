//! Admin route protection.
//!
//! SYSTEM CONTEXT
//! ==============
//! A guard instance lives as long as one mount of a protected view. It starts
//! in `Checking` and is fed every admin `SessionView` the view observes. While
//! the session is still initializing it renders only a loading indicator;
//! "unknown" is never treated as "denied".
//!
//! Neither variant redirects while already sitting on `/admin/login`. The
//! layout variant wraps the whole admin area, login view included, so it also
//! renders its children there whatever the session says.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;

use crate::navigation::{ADMIN_LOGIN_PATH, Navigator};
use crate::session::SessionView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Denied,
    Allowed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardVariant {
    /// Wraps a single protected page.
    Route,
    /// Wraps the admin section, login view included.
    Layout,
}

/// What the guarded view should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardRender {
    Loading,
    /// Draw nothing; a redirect is pending.
    Nothing,
    Children,
}

pub struct RouteGuard {
    variant: GuardVariant,
    current_path: String,
    state: GuardState,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(variant: GuardVariant, current_path: impl Into<String>, navigator: Arc<dyn Navigator>) -> Self {
        Self { variant, current_path: current_path.into(), state: GuardState::Checking, navigator }
    }

    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state
    }

    fn on_login_view(&self) -> bool {
        self.current_path.trim_end_matches('/') == ADMIN_LOGIN_PATH
    }

    /// Advance on a new admin session snapshot and report what to render.
    ///
    /// Entering `Denied` issues one navigation to the login view (none when
    /// already on it). Once resolved, an `initializing` snapshot is ignored;
    /// only a fresh guard starts in `Checking` again.
    pub fn observe(&mut self, view: &SessionView) -> GuardRender {
        let next = match (self.state, view.initializing) {
            (GuardState::Checking, true) => GuardState::Checking,
            (resolved, true) => resolved,
            (_, false) if view.is_authenticated => GuardState::Allowed,
            (_, false) => GuardState::Denied,
        };

        if next == GuardState::Denied && self.state != GuardState::Denied && !self.on_login_view() {
            tracing::debug!(path = %self.current_path, "admin access denied; redirecting to login");
            self.navigator.navigate(ADMIN_LOGIN_PATH);
        }
        self.state = next;
        self.render()
    }

    #[must_use]
    pub fn render(&self) -> GuardRender {
        match self.state {
            GuardState::Checking => GuardRender::Loading,
            GuardState::Allowed => GuardRender::Children,
            GuardState::Denied if self.variant == GuardVariant::Layout && self.on_login_view() => {
                GuardRender::Children
            }
            GuardState::Denied => GuardRender::Nothing,
        }
    }
}
