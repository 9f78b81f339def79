//! Create List Form Component
//!
//! Name input and submit button for a new list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{store_session, store_settle, use_app_store};

#[component]
pub fn CreateListForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let create_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name = new_name.get_untracked();
        set_busy.set(true);

        spawn_local(async move {
            let mut session = store_session(&store);
            let created = ctx.manager().create_list(&mut session, &name).await;
            store_settle(&store, session);
            if created.is_ok() {
                set_new_name.set(String::new());
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="create-list-form" on:submit=create_list>
            <input
                type="text"
                placeholder="Nombre de la nueva lista"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button id="create-list-btn" type="submit" disabled=move || busy.get()>
                "Crear lista"
            </button>
        </form>
    }
}
