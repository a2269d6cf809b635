//! Action type filter bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::GalleryState;
use crate::components::icons as ic;
use crate::config::dom_ids;

stylance::import_crate_style!(css, "src/components/gallery/filters.module.css");

/// Toggle buttons for every action type present, plus a clear button.
///
/// Hidden while there are no labels (loading, empty or failed pass).
#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_context::<GalleryState>().expect("GalleryState must be provided");

    let labels = Signal::derive(move || state.gallery.with(|g| g.action_types.clone()));
    let has_labels = Signal::derive(move || labels.with(|l| !l.is_empty()));
    let active_count = Signal::derive(move || state.filters.with(|f| f.len()));
    let clear_text = move || match active_count.get() {
        0 => "Clear".to_string(),
        n => format!("Clear ({n})"),
    };

    view! {
        <div
            id=dom_ids::FILTERS_CONTAINER
            class=css::container
            style:display=move || if has_labels.get() { "block" } else { "none" }
        >
            <span class=css::label>"Filter by type"</span>
            <div id=dom_ids::FILTERS_LIST class=css::list>
                <For
                    each=move || labels.get()
                    key=|label| label.clone()
                    children=move |label| view! { <FilterButton label=label /> }
                />
            </div>
            <button
                id=dom_ids::CLEAR_FILTERS
                class=css::clear
                disabled=move || active_count.get() == 0
                aria-label="Clear all filters"
                on:click=move |_| state.clear_filters()
            >
                <span class=css::clearIcon aria-hidden="true"><Icon icon=ic::CLOSE /></span>
                {clear_text}
            </button>
        </div>
    }
}

#[component]
fn FilterButton(label: String) -> impl IntoView {
    let state = use_context::<GalleryState>().expect("GalleryState must be provided");

    let label_for_active = label.clone();
    let is_active = Signal::derive(move || state.filters.with(|f| f.is_active(&label_for_active)));

    let label_for_click = label.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        state.toggle_filter(&label_for_click);
    };

    let button_class = move || {
        if is_active.get() {
            format!("{} {}", css::filterBtn, css::active)
        } else {
            css::filterBtn.to_string()
        }
    };

    let aria_label = format!("Filter by {label}");
    let data_tag = label.clone();

    view! {
        <button
            class=button_class
            data-tag=data_tag
            aria-label=aria_label
            aria-pressed=move || is_active.get().to_string()
            on:click=handle_click
        >
            {label}
        </button>
    }
}
