//! Browser network transports.

pub mod api;
