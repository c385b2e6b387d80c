//! Reactive session cells for the two console roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `Sessions` provider over `SignalPhase` cells. Reading a
//! role's view inside a reactive scope subscribes to that role only, so admin
//! transitions never re-render user-facing components and vice versa.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use eventdesk::{AuthService, SessionCell, SessionPhase, SessionProvider};
use leptos::prelude::*;

/// Session phase held in an `RwSignal`.
#[derive(Clone, Copy, Debug)]
pub struct SignalPhase(RwSignal<SessionPhase>);

impl SignalPhase {
    pub fn new() -> Self {
        Self(RwSignal::new(SessionPhase::Pending))
    }
}

impl Default for SignalPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCell for SignalPhase {
    fn get(&self) -> SessionPhase {
        self.0.get()
    }

    fn update(&self, f: impl FnOnce(&mut SessionPhase)) {
        self.0.update(f);
    }
}

/// The application's single session provider.
pub type Sessions = SessionProvider<SignalPhase>;

/// A role-bound session handle.
pub type RoleSession = AuthService<SignalPhase>;
