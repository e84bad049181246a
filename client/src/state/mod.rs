//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`api`, `form`, `modal`, `notifications`) so
//! each component depends on a small focused model. Components hold these
//! in `RwSignal`s provided via context.

pub mod api;
pub mod form;
pub mod modal;
pub mod notifications;
