//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and receives the session handles
//! it needs from `App`.

pub mod admin_dashboard;
pub mod admin_login;
pub mod home;
