//! Per-role session model.
//!
//! DESIGN
//! ======
//! A session is split into the persisted identity (`record`), the in-memory
//! lifecycle (`phase`), where that phase lives (`cell`), and how it reaches
//! durable storage (`store`). Admin and user sessions share these types but
//! never share an instance.

pub mod cell;
pub mod phase;
pub mod record;
pub mod store;

pub use cell::{SessionCell, SharedPhase};
pub use phase::{SessionPhase, SessionView};
pub use record::{Role, SessionRecord};
pub use store::SessionStore;
