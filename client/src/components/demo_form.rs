//! Demo form with one required "Title" field.

use leptos::prelude::*;

use crate::components::notification_stack::notify;
use crate::state::form::DemoFormState;
use crate::state::notifications::NotificationsState;

#[component]
pub fn DemoForm() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let form = RwSignal::new(DemoFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(notice) = form.try_update(DemoFormState::submit) {
            notify(notifications, notice);
        }
    };

    // Validation is ours, not the browser's: no native `required`.
    view! {
        <form class="demo-form" aria-label="demo-form" novalidate on:submit=on_submit>
            <label class="field">
                <span class="field__label">
                    "Title" <span class="field__required" aria-hidden="true">"*"</span>
                </span>
                <input
                    class="field__input"
                    type="text"
                    placeholder="Enter a title"
                    aria-required="true"
                    prop:value=move || form.get().title
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
            </label>
            <button class="btn" type="submit">
                "▶ Submit"
            </button>
        </form>
    }
}
