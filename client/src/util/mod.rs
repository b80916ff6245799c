//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (session storage, route gates)
//! from page and component logic.

pub mod auth;
pub mod session;
