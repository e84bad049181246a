//! Confirmation modal state.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use super::notifications::Notice;

pub const MODAL_TITLE: &str = "Demo Modal";
pub const MODAL_BODY: &str = "Are you sure you want to continue?";
pub const CONFIRMED_MESSAGE: &str = "Confirmed!";

/// Open/closed state of the demo confirmation modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfirmModalState {
    pub open: bool,
}

impl ConfirmModalState {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the modal. Yields the confirmation notice only if it was open.
    pub fn confirm(&mut self) -> Option<Notice> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(Notice::info(CONFIRMED_MESSAGE))
    }

    /// Close the modal without side effects.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Escape cancels an open modal. Returns whether the key was consumed.
    pub fn dismiss_on_key(&mut self, key: &str) -> bool {
        if !self.open || key != "Escape" {
            return false;
        }
        self.cancel();
        true
    }
}
