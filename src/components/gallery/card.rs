//! Connector card.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::CardView;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/gallery/card.module.css");

/// A single connector card.
///
/// Clicking anywhere on the card opens the hosted file in a new tab; the
/// footer link does the same natively and stops the click from bubbling.
#[component]
pub fn ActionCard(card: CardView, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let CardView {
        title,
        path,
        size,
        type_label,
        description,
        tags,
        url,
    } = card;

    let url_for_click = url.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        dom::open_in_new_tab(&url_for_click);
    };

    let data_tags = type_label.clone();
    let has_tags = !tags.is_empty();
    let tag_views = tags
        .into_iter()
        .map(|tag| view! { <span class=css::tag>{tag}</span> })
        .collect_view();

    view! {
        <div
            class=css::card
            data-tags=data_tags
            style:display=move || if visible.get() { "" } else { "none" }
            on:click=handle_click
        >
            <div class=css::cardHeader>
                <div class=css::titleWrapper>
                    <div class=css::title>{title}</div>
                    <div class=css::path>
                        <span class=css::pathIcon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
                        {path}
                        <span class=css::size>{size}</span>
                    </div>
                </div>
                <span class=css::typeBadge>{type_label}</span>
            </div>

            <div class=css::description>{description}</div>

            {has_tags.then(|| view! { <div class=css::meta>{tag_views}</div> })}

            <div class=css::footer>
                <a
                    href=url
                    class=css::link
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    "View on GitHub"
                    <span class=css::linkIcon aria-hidden="true"><Icon icon=ic::EXTERNAL_LINK /></span>
                </a>
            </div>
        </div>
    }
}
