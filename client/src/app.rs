//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::api_panels::{ApiInfoPanel, HealthPanel, RefreshControls, load_api_info, load_health};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::demo_form::DemoForm;
use crate::components::header::{APP_TITLE, AppHeader};
use crate::components::notification_stack::NotificationStack;
use crate::state::api::ApiState;
use crate::state::modal::ConfirmModalState;
use crate::state::notifications::NotificationsState;
use crate::util::color_scheme::{self, BrowserStorage};

/// Root application component.
///
/// Provides all shared state contexts and kicks off the initial fetches.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Read once at startup; the toggle writes it back.
    let scheme = RwSignal::new(color_scheme::read_preference(&BrowserStorage));
    color_scheme::apply(scheme.get_untracked());

    let api = RwSignal::new(ApiState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let modal = RwSignal::new(ConfirmModalState::default());

    provide_context(scheme);
    provide_context(api);
    provide_context(notifications);
    provide_context(modal);

    // Reads nothing reactive, so it runs once after mount.
    Effect::new(move || {
        load_api_info(api);
        load_health(api);
    });

    view! {
        <Title text=APP_TITLE/>
        <div class="app-shell">
            <AppHeader/>
            <main class="app-shell__main">
                <div class="stack">
                    <DemoForm/>
                    <RefreshControls/>
                    <ApiInfoPanel/>
                    <HealthPanel/>
                </div>
            </main>
            <ConfirmModal/>
            <NotificationStack/>
        </div>
    }
}
