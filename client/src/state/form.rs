//! Demo form state and submit validation.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::notifications::Notice;

pub const TITLE_REQUIRED: &str = "Title is required";

/// The demo form's single required field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoFormState {
    pub title: String,
}

impl DemoFormState {
    /// Validate and submit the form, returning the notice to show.
    ///
    /// A blank or whitespace-only title is rejected and left in place. Any
    /// other title is echoed back as typed and the field is cleared.
    pub fn submit(&mut self) -> Notice {
        if self.title.trim().is_empty() {
            return Notice::error("Validation", TITLE_REQUIRED);
        }
        let title = std::mem::take(&mut self.title);
        Notice::success("Form Submitted", format!("Title: {title}"))
    }
}
