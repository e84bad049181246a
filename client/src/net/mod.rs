//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the two JSON endpoints; record types come from `contract`.

pub mod api;
