//! API information and server health panels, plus their refresh controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The two loaders are independent: each spawns its own fetch and writes its
//! own slot of `ApiState`, so completions may land in either order.

use leptos::prelude::*;

use crate::state::api::{ApiState, health_rows, info_rows};

/// Fetch `/api/info` into `api`, toggling the loading flag around it.
pub fn load_api_info(api: RwSignal<ApiState>) {
    api.update(ApiState::begin_info_fetch);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_api_info().await;
        api.update(|s| s.finish_info_fetch(result));
    });
    #[cfg(not(feature = "csr"))]
    api.update(|s| s.finish_info_fetch(Err(crate::net::api::ApiError::Unavailable)));
}

/// Fetch `/api/health` into `api`.
pub fn load_health(api: RwSignal<ApiState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_health().await;
        api.update(|s| s.finish_health_fetch(result));
    });
    #[cfg(not(feature = "csr"))]
    api.update(|s| s.finish_health_fetch(Err(crate::net::api::ApiError::Unavailable)));
}

/// Manual refresh buttons.
#[component]
pub fn RefreshControls() -> impl IntoView {
    let api = expect_context::<RwSignal<ApiState>>();
    let loading = move || api.get().info_loading;

    view! {
        <div class="button-row">
            <button
                class=move || if loading() { "btn btn--loading" } else { "btn" }
                disabled=loading
                data-testid="refresh-api-info"
                on:click=move |_| load_api_info(api)
            >
                {move || if loading() { "Loading…" } else { "Refresh API Info" }}
            </button>
            <button class="btn btn--default" data-testid="check-health" on:click=move |_| load_health(api)>
                "Check Server Health"
            </button>
        </div>
    }
}

/// Renders `rows` as `Label: value` lines.
fn rows_view(rows: impl IntoIterator<Item = (&'static str, String)>) -> impl IntoView {
    rows.into_iter()
        .map(|(label, value)| {
            view! {
                <p class="panel__row">
                    <strong>{label} ":"</strong>
                    " "
                    {value}
                </p>
            }
        })
        .collect_view()
}

/// Shown once `/api/info` has answered.
#[component]
pub fn ApiInfoPanel() -> impl IntoView {
    let api = expect_context::<RwSignal<ApiState>>();

    move || {
        api.get().info.map(|info| {
            view! {
                <section class="panel">
                    <h4>"API Information"</h4>
                    {rows_view(info_rows(&info))}
                </section>
            }
        })
    }
}

/// Shown once `/api/health` has answered.
#[component]
pub fn HealthPanel() -> impl IntoView {
    let api = expect_context::<RwSignal<ApiState>>();

    move || {
        api.get().health.map(|health| {
            view! {
                <section class="panel">
                    <h4>"Server Health"</h4>
                    {rows_view(health_rows(&health))}
                </section>
            }
        })
    }
}
