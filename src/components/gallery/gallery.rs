//! Main gallery component.
//!
//! Runs the render pass once on mount and reflects its progress:
//! loading indicator, error message, empty state or the card grid.

use leptos::logging::{error, log};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{ActionCard, FilterBar};
use crate::app::{GalleryState, LoadState};
use crate::config::{CONNECTORS_ROOT, EMPTY_MESSAGE, dom_ids, enrich};
use crate::core::error::FetchError;
use crate::core::{FilterOutcome, load_gallery};
use crate::utils::{GitHubClient, dom};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Fetch, enrich and publish the gallery.
fn run_render_pass(state: GalleryState) {
    spawn_local(async move {
        let client = GitHubClient::default();
        let result = load_gallery(&client, CONNECTORS_ROOT, || {
            dom::delay(enrich::BATCH_PAUSE_MS)
        })
        .await;

        match &result {
            Err(FetchError::Network(detail)) => {
                error!("Error rendering actions: GitHub unreachable ({})", detail)
            }
            Err(e) => error!("Error rendering actions: {}", e),
            Ok(gallery) => log!("Rendered {} action cards", gallery.cards.len()),
        }
        state.finish(result);
    });
}

/// Gallery page body.
#[component]
pub fn Gallery() -> impl IntoView {
    let state = use_context::<GalleryState>().expect("GalleryState must be provided");

    run_render_pass(state);

    let outcome = Memo::new(move |_| state.outcome());
    let heading = move || outcome.with(FilterOutcome::heading);

    let is_loading = move || state.status.with(|s| *s == LoadState::Loading);
    let error_text = move || match state.status.get() {
        LoadState::Failed(message) => Some(message),
        _ => None,
    };

    let cards = move || {
        state.gallery.with(|g| {
            g.cards
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, card)| {
                    let visible = Signal::derive(move || {
                        outcome.with(|o| o.visible.get(index).copied().unwrap_or(true))
                    });
                    view! { <ActionCard card=card visible=visible /> }
                })
                .collect_view()
        })
    };

    let grid = move || match state.status.get() {
        LoadState::Ready => cards().into_any(),
        LoadState::Empty => view! { <p class=css::empty>{EMPTY_MESSAGE}</p> }.into_any(),
        LoadState::Loading | LoadState::Failed(_) => ().into_any(),
    };

    view! {
        <section class=css::marketplace>
            <div class=format!("{} marketplace-header", css::header)>
                <h3>{heading}</h3>
            </div>

            <FilterBar />

            <div
                id=dom_ids::LOADING
                class=css::loading
                style:display=move || if is_loading() { "block" } else { "none" }
            >
                "Loading actions..."
            </div>

            <div
                id=dom_ids::ERROR_MESSAGE
                class=css::error
                role="alert"
                style:display=move || if error_text().is_some() { "block" } else { "none" }
            >
                <p>"Failed to load actions. Please try again later."</p>
                <p class=css::errorDetail>{error_text}</p>
            </div>

            <div id=dom_ids::GRID class=css::grid>
                {grid}
            </div>
        </section>
    }
}
