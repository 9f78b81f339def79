//! List Card Component
//!
//! One list: cover collage, name, movie count, edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalogo_lists::view::COVER_FALLBACK;
use catalogo_lists::{CoverSlot, ListCardView};

use crate::context::use_app_context;
use crate::store::{store_session, store_settle, use_app_store};

/// Swap a broken poster for the fallback image, once
pub fn fallback_on_error<E: AsRef<web_sys::Event>>(ev: E, fallback: &'static str) {
    let img = event_target::<web_sys::HtmlImageElement>(ev.as_ref());
    if img.src() != fallback {
        img.set_src(fallback);
    }
}

#[component]
fn Collage(slots: Vec<CoverSlot>) -> impl IntoView {
    view! {
        <div class="list-cover-collage">
            {slots.into_iter().map(|slot| match slot {
                CoverSlot::Poster { src, alt } => view! {
                    <img
                        class="list-cover-img"
                        src=src
                        alt=alt
                        on:error=move |ev| fallback_on_error(ev, COVER_FALLBACK)
                    />
                }.into_any(),
                CoverSlot::Placeholder => view! {
                    <div class="empty-cover-placeholder">"?"</div>
                }.into_any(),
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn ListCard(card: ListCardView) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = card.id;
    let (busy, set_busy) = signal(false);

    let on_edit = move |_| {
        spawn_local(async move {
            let mut session = store_session(&store);
            let _ = ctx.manager().open_edit_modal(&mut session, id).await;
            store_settle(&store, session);
        });
    };

    let on_delete = move |_| {
        set_busy.set(true);
        spawn_local(async move {
            let mut session = store_session(&store);
            let _ = ctx.manager().delete_list(&mut session, id).await;
            store_settle(&store, session);
            set_busy.set(false);
        });
    };

    view! {
        <div class="list-card" data-list-id=id.to_string()>
            <Collage slots=card.collage />
            <div class="list-info">
                <h3 class="list-title">{card.name}</h3>
                <p class="list-count">{card.count_label}</p>
            </div>
            <div class="list-actions">
                <button class="edit-list-btn action-btn" title="Editar Lista" on:click=on_edit>
                    <i class="fas fa-edit"></i>
                </button>
                <button
                    class="delete-list-btn action-btn"
                    title="Eliminar Lista"
                    disabled=move || busy.get()
                    on:click=on_delete
                >
                    <i class="fas fa-trash-alt"></i>
                </button>
            </div>
        </div>
    }
}
