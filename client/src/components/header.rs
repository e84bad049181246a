//! App header with title, demo actions, and the color scheme toggle.

use leptos::prelude::*;

use crate::components::color_scheme_toggle::ColorSchemeToggle;
use crate::components::notification_stack::notify;
use crate::state::modal::ConfirmModalState;
use crate::state::notifications::{Notice, NotificationsState};

pub const APP_TITLE: &str = "Spec-Kit Project Test";
pub const APP_SUBTITLE: &str = "Leptos + Axum";
pub const HELLO_MESSAGE: &str = "Hello from Notifications!";

#[component]
pub fn AppHeader() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let modal = expect_context::<RwSignal<ConfirmModalState>>();

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <h3 class="app-header__title">{APP_TITLE}</h3>
                <span class="app-header__subtitle">{APP_SUBTITLE}</span>
            </div>
            <div class="app-header__actions">
                <button class="btn btn--light" on:click=move |_| notify(notifications, Notice::info(HELLO_MESSAGE))>
                    "Show Notification"
                </button>
                <button class="btn btn--outline" on:click=move |_| modal.update(ConfirmModalState::open)>
                    "Open Modal"
                </button>
                <ColorSchemeToggle/>
            </div>
        </header>
    }
}
