//! Top-right stack of transient notifications.

use leptos::prelude::*;

use crate::state::notifications::{Notice, NotificationsState};

/// Queue a notification and, in the browser, schedule its auto-dismiss.
pub fn notify(notifications: RwSignal<NotificationsState>, notice: Notice) {
    let id = notifications.try_update(|s| s.push(notice));

    #[cfg(feature = "csr")]
    {
        if let Some(id) = id {
            gloo_timers::callback::Timeout::new(crate::state::notifications::AUTO_CLOSE_MS, move || {
                let _ = notifications.try_update(|s| s.dismiss(id));
            })
            .forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Renders every queued notification with a close button.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let title = n.notice.title.map(|t| view! { <strong class="notification__title">{t}</strong> });
                    view! {
                        <div class=n.notice.tone.class() role="status">
                            <div class="notification__body">
                                {title}
                                <p class="notification__message">{n.notice.message}</p>
                            </div>
                            <button
                                class="notification__close"
                                aria-label="Close notification"
                                on:click=move |_| {
                                    notifications.update(|s| {
                                        s.dismiss(id);
                                    });
                                }
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
