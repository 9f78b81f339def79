//! Movie Catalog Component
//!
//! Posters from the local catalog. Clicking one opens its details.

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalogo_lists::view::COVER_FALLBACK;
use catalogo_lists::MoviePreview;

use crate::components::list_card::fallback_on_error;
use crate::context::use_app_context;
use crate::store::{use_app_store, CatalogStateStoreFields};

#[component]
fn PosterItem(movie: MoviePreview) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = movie.id;
    let poster = movie.poster_url.unwrap_or_else(|| COVER_FALLBACK.to_string());
    let title = movie.title;
    let year = movie.year.map(|y| y.to_string()).unwrap_or_default();

    let show_details = move |_| {
        spawn_local(async move {
            if let Ok(details) = ctx.manager().show_movie(id).await {
                store.details().set(Some(details));
            }
        });
    };

    view! {
        <div class="poster-item" data-movie-id=id.to_string() on:click=show_details>
            <img
                src=poster
                alt=title.clone()
                on:error=move |ev| fallback_on_error(ev, COVER_FALLBACK)
            />
            <div class="poster-info">
                <span class="poster-title">{title}</span>
                <span class="poster-year">{year}</span>
            </div>
        </div>
    }
}

#[component]
pub fn MovieCatalog() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Load once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.manager().fetch_catalog().await {
                Ok(movies) => {
                    log::debug!("loaded {} catalog movies", movies.len());
                    store.movies().set(movies);
                    store.catalog_error().set(None);
                }
                Err(e) => {
                    log::error!("failed to load catalog: {}", e);
                    store.catalog_error().set(Some("No se pudo cargar el catálogo.".to_string()));
                }
            }
        });
    });

    view! {
        <section id="movie-catalog" class="movie-catalog">
            <h2>"Catálogo"</h2>
            {move || store.catalog_error().get().map(|msg| view! { <p class="error-msg">{msg}</p> })}
            <div class="poster-grid">
                <For
                    each=move || store.movies().get()
                    key=|movie| movie.id
                    children=move |movie| view! { <PosterItem movie=movie /> }
                />
            </div>
        </section>
    }
}
