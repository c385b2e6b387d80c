//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive the session handles they need as properties; nothing
//! here looks sessions up from context.

pub mod guard;
pub mod login_modal;
