//! Root application module.
//!
//! Contains the main App component, the [`GalleryState`] context and the
//! application-level error boundary.

use leptos::prelude::*;

use crate::components::Gallery;
use crate::core::error::FetchError;
use crate::core::{FilterOutcome, FilterState, GalleryView, apply_filters};
use crate::utils::dom;

// ============================================================================
// LoadState
// ============================================================================

/// Progress of the single render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Pipeline still running
    #[default]
    Loading,
    /// Cards available
    Ready,
    /// Walk finished without finding any source file
    Empty,
    /// Top-level listing failed; carries the user-facing message
    Failed(String),
}

impl LoadState {
    /// State reached once the pipeline settles.
    pub fn settled(result: &Result<GalleryView, FetchError>) -> Self {
        match result {
            Ok(view) if view.is_empty() => Self::Empty,
            Ok(_) => Self::Ready,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

// ============================================================================
// GalleryState
// ============================================================================

/// Gallery state managed with Leptos signals.
///
/// The filter set lives here and nowhere else; components mutate it only
/// through [`toggle_filter`](Self::toggle_filter) and
/// [`clear_filters`](Self::clear_filters).
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct GalleryState {
    pub status: RwSignal<LoadState>,
    pub gallery: RwSignal<GalleryView>,
    pub filters: RwSignal<FilterState>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(LoadState::Loading),
            gallery: RwSignal::new(GalleryView::default()),
            filters: RwSignal::new(FilterState::new()),
        }
    }

    /// Publish the pipeline result. A failure clears the grid.
    pub fn finish(&self, result: Result<GalleryView, FetchError>) {
        self.status.set(LoadState::settled(&result));
        self.gallery.set(result.unwrap_or_default());
    }

    pub fn toggle_filter(&self, label: &str) {
        self.filters.update(|f| {
            f.toggle(label);
        });
    }

    pub fn clear_filters(&self) {
        self.filters.update(FilterState::clear);
    }

    /// Current visibility of every card (tracked).
    pub fn outcome(&self) -> FilterOutcome {
        self.filters
            .with(|filters| self.gallery.with(|g| apply_filters(filters, &g.cards)))
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the [`GalleryState`] context
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the [`Gallery`]
#[component]
pub fn App() -> impl IntoView {
    provide_context(GalleryState::new());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 60vh;
                    padding: 2rem;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #a0a0a0; margin-bottom: 2rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| dom::reload()>"Reload Page"</button>
                </div>
            }
        >
            <Gallery />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardView;

    fn card() -> CardView {
        CardView {
            title: "Swap".to_string(),
            path: "connectors/SwapConnectors.cdc".to_string(),
            size: "2.0K".to_string(),
            type_label: "Swapper".to_string(),
            description: "Swaps.".to_string(),
            tags: vec!["Swap Operations".to_string()],
            url: "https://github.example/SwapConnectors.cdc".to_string(),
        }
    }

    #[test]
    fn test_settled_states() {
        assert_eq!(LoadState::settled(&Ok(GalleryView::default())), LoadState::Empty);

        let ready = GalleryView {
            cards: vec![card()],
            action_types: vec!["Swapper".to_string()],
        };
        assert_eq!(LoadState::settled(&Ok(ready)), LoadState::Ready);

        let failed = LoadState::settled(&Err(FetchError::Network("dns".to_string())));
        assert!(matches!(failed, LoadState::Failed(msg) if msg.contains("Unable to connect")));
    }
}
