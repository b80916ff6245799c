//! Plain-data UI state.
//!
//! DESIGN
//! ======
//! State structs hold no signals. Components wrap them in `RwSignal` and call
//! the transition methods inside `update`, which keeps every rule testable
//! without a reactive runtime.

pub mod draft;
pub mod quizzes;
