//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app shell and its demo interactions while
//! reading/writing shared state from Leptos context providers.

pub mod api_panels;
pub mod color_scheme_toggle;
pub mod confirm_modal;
pub mod demo_form;
pub mod header;
pub mod notification_stack;
