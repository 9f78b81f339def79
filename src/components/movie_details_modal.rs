//! Movie Details Modal Component
//!
//! Poster, description, year and genre of one movie, with the button that
//! starts adding it to a list.

use leptos::prelude::*;

use catalogo_lists::view::COVER_FALLBACK;

use crate::components::list_card::fallback_on_error;
use crate::store::{store_update_session, use_app_store, CatalogStateStoreFields};

#[component]
pub fn MovieDetailsModal() -> impl IntoView {
    let store = use_app_store();

    let close = move || store.details().set(None);

    // Details close before the add-to-list dialog opens
    let add_to_list = move |_| {
        let Some(details) = store.details().get_untracked() else {
            return;
        };
        store.details().set(None);
        store_update_session(&store, move |s| s.begin_add(details.preview()));
    };

    let body = move || {
        store.details().get().map(|movie| {
            let poster = movie.poster_url.clone().unwrap_or_else(|| COVER_FALLBACK.to_string());
            view! {
                <div id="details-modal-body">
                    <div class="details-poster-column">
                        <img
                            class="details-poster-image"
                            src=poster
                            alt=movie.title_text().to_string()
                            on:error=move |ev| fallback_on_error(ev, COVER_FALLBACK)
                        />
                    </div>
                    <div class="details-info-column">
                        <h2 class="details-movie-title">{movie.title_text().to_string()}</h2>
                        <button id="add-to-list-from-details" class="details-add-to-list-btn" on:click=add_to_list>
                            <i class="fas fa-plus"></i>
                            " Añadir a Lista"
                        </button>
                        <p class="details-description">{movie.description_text().to_string()}</p>
                        <div class="details-additional-info">
                            <div class="details-info-row">
                                <span class="details-info-label">"Año:"</span>
                                <span class="details-info-value">{movie.year_text()}</span>
                                <span class="details-info-label">"Genero:"</span>
                                <span class="details-info-value">{movie.genre_text().to_string()}</span>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <Show when=move || store.details().with(|d| d.is_some())>
            <div id="movie-details-modal" class="modal active" on:click=move |_| close()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <span id="details-close-btn" class="close-btn" on:click=move |_| close()>"×"</span>
                    {body}
                </div>
            </div>
        </Show>
    }
}
