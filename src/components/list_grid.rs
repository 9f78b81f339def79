//! List Grid Component
//!
//! The lists container: a card per list, or a status message.

use leptos::prelude::*;

use catalogo_lists::ListsPanel;

use crate::components::ListCard;
use crate::context::use_app_context;
use crate::store::{use_app_store, CatalogStateStoreFields};

#[component]
pub fn ListGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let panel = Memo::new(move |_| store.session().with(|s| s.panel().clone()));

    view! {
        <div id="lists-container" class="lists-grid">
            {move || {
                let panel = panel.get();
                match panel.message() {
                    Some(message) => {
                        let class = match panel {
                            ListsPanel::Loading => "loading-msg",
                            ListsPanel::Empty => "empty-msg",
                            _ => "error-msg",
                        };
                        let retry = matches!(panel, ListsPanel::Failed);
                        view! {
                            <p class=class>{message}</p>
                            <Show when=move || retry>
                                <button class="retry-btn" on:click=move |_| ctx.reload()>
                                    "Reintentar"
                                </button>
                            </Show>
                        }.into_any()
                    }
                    None => panel
                        .cards()
                        .iter()
                        .cloned()
                        .map(|card| view! { <ListCard card=card /> })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}
