//! Edit List Modal Component
//!
//! Rename the open list and remove movies from it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use catalogo_lists::view::TILE_FALLBACK;
use catalogo_lists::MovieTile;

use crate::components::list_card::fallback_on_error;
use crate::context::use_app_context;
use crate::store::{
    store_session, store_settle, store_update_session, use_app_store, CatalogStateStoreFields,
};

/// Raw `data-movie-id` of the clicked button
fn clicked_movie_id(ev: &web_sys::MouseEvent) -> String {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.get_attribute("data-movie-id"))
        .unwrap_or_default()
}

#[component]
pub fn EditListModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let modal = Memo::new(move |_| store.session().with(|s| s.modal().cloned()));
    let (name_value, set_name_value) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Reset the name field only when a different list is opened
    Effect::new(move |prev: Option<Option<u32>>| {
        let current = modal.with(|m| m.as_ref().map(|m| m.list_id));
        if prev != Some(current) {
            if let Some(m) = modal.get_untracked() {
                set_name_value.set(m.name);
            }
        }
        current
    });

    let close = move || store_update_session(&store, |s| s.close_modal());

    let save_name = move |_| {
        let name = name_value.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let mut session = store_session(&store);
            let _ = ctx.manager().rename_current(&mut session, &name).await;
            store_settle(&store, session);
            set_saving.set(false);
        });
    };

    let remove_movie = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Some(list_id) = modal.with_untracked(|m| m.as_ref().map(|m| m.list_id)) else {
            return;
        };
        let raw_id = clicked_movie_id(&ev);
        spawn_local(async move {
            let mut session = store_session(&store);
            let _ = ctx.manager().remove_movie(&mut session, list_id, &raw_id).await;
            store_settle(&store, session);
        });
    };

    let tile_view = move |tile: MovieTile| {
        view! {
            <div class="edit-movie-card" data-movie-id=tile.movie_id.to_string()>
                <img
                    src=tile.poster_src
                    alt=tile.title
                    on:error=move |ev| fallback_on_error(ev, TILE_FALLBACK)
                />
                <button
                    class="remove-movie-btn"
                    title="Quitar de la lista"
                    data-movie-id=tile.movie_id.to_string()
                    on:click=remove_movie
                >
                    <i class="fas fa-trash-alt"></i>
                </button>
            </div>
        }
    };

    view! {
        <Show when=move || modal.with(|m| m.is_some())>
            <div id="edit-list-modal" class="modal" on:click=move |_| close()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <span class="edit-modal-close" on:click=move |_| close()>"×"</span>
                    <div class="edit-name-row">
                        <input
                            id="edit-list-name-input"
                            type="text"
                            prop:value=move || name_value.get()
                            on:input=move |ev| set_name_value.set(event_target_value(&ev))
                        />
                        <button
                            id="save-list-name-btn"
                            disabled=move || saving.get()
                            on:click=save_name
                        >
                            "Guardar"
                        </button>
                    </div>
                    <p class="movie-count">
                        "Películas: "
                        <span id="movie-count-display">
                            {move || modal.with(|m| m.as_ref().map(|m| m.count).unwrap_or(0))}
                        </span>
                    </p>
                    <div id="edit-movie-list-container" class="edit-movie-grid">
                        {move || {
                            modal
                                .get()
                                .map(|m| m.tiles)
                                .unwrap_or_default()
                                .into_iter()
                                .map(tile_view)
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
