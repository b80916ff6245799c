//! Networking modules for the remote quiz API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the transport seam and browser transport, `api` implements
//! the REST operations on top of it, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
