//! Add To List Modal Component
//!
//! Choose a destination list for the pending movie.

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalogo_lists::ListOption;

use crate::context::use_app_context;
use crate::store::{
    store_session, store_settle, store_update_session, use_app_store, CatalogStateStoreFields,
};

/// Destinations shown in the dialog
#[derive(Debug, Clone, PartialEq)]
enum Targets {
    Loading,
    LoginRequired,
    Failed,
    Ready(Vec<ListOption>),
}

#[component]
pub fn AddToListModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let pending = Memo::new(move |_| store.session().with(|s| s.pending_movie().cloned()));
    let (targets, set_targets) = signal(Targets::Loading);
    let (chosen, set_chosen) = signal::<Option<u32>>(None);
    let (busy, set_busy) = signal(false);

    // Reload destinations each time a movie is picked
    Effect::new(move |_| {
        if pending.with(|p| p.is_none()) {
            return;
        }
        set_chosen.set(None);
        set_targets.set(Targets::Loading);
        spawn_local(async move {
            let loaded = match ctx.manager().load_add_targets().await {
                Ok(options) => Targets::Ready(options),
                Err(e) if e.is_auth() => Targets::LoginRequired,
                Err(e) => {
                    log::error!("failed to load lists for add dialog: {}", e);
                    Targets::Failed
                }
            };
            set_targets.set(loaded);
        });
    });

    let close = move || {
        set_chosen.set(None);
        store_update_session(&store, |s| s.clear_pending());
    };

    let confirm = move |_| {
        set_busy.set(true);
        let list_id = chosen.get_untracked();
        spawn_local(async move {
            let mut session = store_session(&store);
            let _ = ctx.manager().confirm_add(&mut session, list_id).await;
            store_settle(&store, session);
            set_chosen.set(None);
            set_busy.set(false);
        });
    };

    let options_view = move || match targets.get() {
        Targets::Loading => view! { <p class="loading-msg">"Cargando tus listas..."</p> }.into_any(),
        Targets::LoginRequired => view! {
            <p class="error-msg">"Debes iniciar sesión para ver tus listas."</p>
        }.into_any(),
        Targets::Failed => view! { <p class="error-msg">"Error al cargar tus listas."</p> }.into_any(),
        Targets::Ready(options) if options.is_empty() => {
            view! { <p>"No tienes listas. ¡Crea una!"</p> }.into_any()
        }
        Targets::Ready(options) => options
            .into_iter()
            .map(|option| {
                let id = option.id;
                let input_id = format!("list-{}", id);
                view! {
                    <div class="list-option">
                        <input
                            type="radio"
                            name="list-selection"
                            id=input_id.clone()
                            value=id.to_string()
                            prop:checked=move || chosen.get() == Some(id)
                            on:change=move |_| set_chosen.set(Some(id))
                        />
                        <label for=input_id>{option.name}</label>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <Show when=move || pending.with(|p| p.is_some())>
            <div id="add-to-list-modal" class="modal" on:click=move |_| close()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <span class="close-btn" on:click=move |_| close()>"×"</span>
                    <h3>
                        "Añadir "
                        <span id="modal-movie-title">
                            {move || pending.with(|p| p.as_ref().map(|m| m.title.clone()).unwrap_or_default())}
                        </span>
                        " a una lista"
                    </h3>
                    <div id="modal-list-options">{options_view}</div>
                    <button
                        id="confirm-add-btn"
                        disabled=move || busy.get() || chosen.get().is_none()
                        on:click=confirm
                    >
                        "Añadir"
                    </button>
                </div>
            </div>
        </Show>
    }
}
