//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components own their local form state and talk to the API through
//! `net::api`; pages only compose them and decide where to navigate.

pub mod create_quiz;
pub mod credentials_form;
pub mod quiz_list;
pub mod quiz_map;
