//! Catalogo Frontend App
//!
//! Lists page with the movie catalog below it.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use catalogo_lists::ClientConfig;

use crate::components::{
    AddToListModal, CreateListForm, EditListModal, ListGrid, MovieCatalog, MovieDetailsModal,
};
use crate::context::AppContext;
use crate::store::{
    store_session, store_settle, store_update_session, CatalogState, CatalogStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(CatalogState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let config = ClientConfig::from_env();
    log::info!("using API at {} ({:?} auth)", config.api_base, config.auth);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load lists on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("loading lists, trigger={}", trigger);
        spawn_local(async move {
            let mut session = store_session(&store);
            ctx.manager().fetch_lists(&mut session).await;
            store_settle(&store, session);
        });
    });

    // Escape closes the movie details and add-to-list dialogs
    let _escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            store.details().set(None);
            store_update_session(&store, |s| s.clear_pending());
        }
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <header class="lists-header">
                    <h1>"Mis Listas"</h1>
                    <CreateListForm />
                </header>

                <ListGrid />

                <MovieCatalog />
            </main>

            <EditListModal />
            <MovieDetailsModal />
            <AddToListModal />
        </div>
    }
}
