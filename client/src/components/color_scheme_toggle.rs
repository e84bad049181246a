//! Icon button switching between the light and dark schemes.

use leptos::prelude::*;

use crate::util::color_scheme::{self, BrowserStorage, ColorScheme};

#[component]
pub fn ColorSchemeToggle() -> impl IntoView {
    let scheme = expect_context::<RwSignal<ColorScheme>>();

    let on_click = move |_| {
        let next = color_scheme::toggle(&BrowserStorage, scheme.get_untracked());
        scheme.set(next);
    };

    view! {
        <button
            class="icon-button"
            aria-label="Toggle color scheme"
            title=move || scheme.get().toggle_title()
            on:click=on_click
        >
            {move || scheme.get().toggle_icon()}
        </button>
    }
}
