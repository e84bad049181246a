//! Demo confirmation modal.

use leptos::prelude::*;

use crate::components::notification_stack::notify;
use crate::state::modal::{ConfirmModalState, MODAL_BODY, MODAL_TITLE};
use crate::state::notifications::NotificationsState;

/// Modal requiring an explicit Confirm or Cancel. Backdrop click and Escape
/// count as Cancel. The dialog takes focus on open so Escape reaches it.
#[component]
pub fn ConfirmModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ConfirmModalState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let on_confirm = move |_| {
        if let Some(notice) = modal.try_update(ConfirmModalState::confirm).flatten() {
            notify(notifications, notice);
        }
    };
    let on_cancel = move |_| modal.update(ConfirmModalState::cancel);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        if modal.try_update(|m| m.dismiss_on_key(&key)).unwrap_or(false) {
            ev.prevent_default();
        }
    };

    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if modal.get().open {
            #[cfg(feature = "csr")]
            {
                if let Some(dialog) = dialog_ref.get() {
                    let _ = dialog.focus();
                }
            }
        }
    });

    view! {
        <Show when=move || modal.get().open>
            <div class="dialog-backdrop" on:click=on_cancel>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="demo-modal-title"
                    tabindex="-1"
                    node_ref=dialog_ref
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2 id="demo-modal-title">{MODAL_TITLE}</h2>
                    <p>{MODAL_BODY}</p>
                    <div class="dialog__actions">
                        <button class="btn btn--default" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn" on:click=on_confirm>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
