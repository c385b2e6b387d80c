//! Where a role's phase lives.
//!
//! SYSTEM CONTEXT
//! ==============
//! Native callers keep the phase behind a mutex; the Leptos client keeps it in
//! an `RwSignal` so views re-render on every transition. Both satisfy
//! `SessionCell`, which is all the auth service needs.

use std::sync::{Arc, Mutex, PoisonError};

use super::phase::SessionPhase;

pub trait SessionCell: Clone + Send + Sync + 'static {
    /// Current phase. Reactive cells track the read.
    fn get(&self) -> SessionPhase;

    /// Apply a transition in place.
    fn update(&self, f: impl FnOnce(&mut SessionPhase));
}

/// Mutex-backed cell for native consumers and tests.
#[derive(Clone, Debug, Default)]
pub struct SharedPhase(Arc<Mutex<SessionPhase>>);

impl SharedPhase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCell for SharedPhase {
    fn get(&self) -> SessionPhase {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn update(&self, f: impl FnOnce(&mut SessionPhase)) {
        let mut phase = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut phase);
    }
}
