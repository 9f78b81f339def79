//! List Manager Tests
//!
//! The whole flow against the in-memory backend and recorded dialogs.

use std::cell::{Cell, RefCell};

use super::*;
use crate::api::memory::Call;
use crate::api::{ListsApi, MemoryListsApi};
use crate::view::CoverSlot;

struct RecordingDialogs {
    answer: Cell<bool>,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    redirects: RefCell<Vec<String>>,
}

impl RecordingDialogs {
    fn new() -> Self {
        Self {
            answer: Cell::new(true),
            alerts: RefCell::new(Vec::new()),
            confirms: RefCell::new(Vec::new()),
            redirects: RefCell::new(Vec::new()),
        }
    }

    fn last_alert(&self) -> Option<String> {
        self.alerts.borrow().last().cloned()
    }
}

impl Dialogs for RecordingDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn redirect(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_string());
    }
}

type TestManager = ListManager<MemoryListsApi, RecordingDialogs>;

fn catalog() -> Vec<MoviePreview> {
    vec![
        MoviePreview::with_poster(1, "Alien", "http://img/alien.jpg"),
        MoviePreview::with_poster(2, "Brazil", "http://img/brazil.jpg"),
        MoviePreview::new(3, "Chinatown"),
        MoviePreview::new(4, "Dune"),
        MoviePreview::new(5, "Eraserhead"),
    ]
}

fn setup() -> TestManager {
    let api = MemoryListsApi::new().with_catalog(catalog());
    ListManager::new(api, RecordingDialogs::new(), "/login/")
}

#[tokio::test]
async fn test_fetch_renders_collage_and_count() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[1, 2]);
    let mut session = UiSession::new();

    let lists = manager.fetch_lists(&mut session).await;
    assert_eq!(lists.len(), 1);

    let card = &session.panel().cards()[0];
    assert_eq!(card.id, id);
    assert_eq!(card.name, "Favs");
    assert_eq!(card.count_label, "2 Películas");
    assert_eq!(card.collage.iter().filter(|s| s.is_placeholder()).count(), 2);
    assert!(matches!(&card.collage[0], CoverSlot::Poster { src, .. } if src == "http://img/alien.jpg"));
}

#[tokio::test]
async fn test_fetch_collage_uses_full_count() {
    let manager = setup();
    manager.api().seed_list("All", &[1, 2, 3, 4, 5]);
    let mut session = UiSession::new();

    manager.fetch_lists(&mut session).await;
    let card = &session.panel().cards()[0];
    assert!(card.collage.iter().all(|s| !s.is_placeholder()));
    assert_eq!(card.count_label, "5 Películas");
}

#[tokio::test]
async fn test_fetch_fails_open() {
    let manager = setup();
    manager.api().set_logged_in(false);
    let mut session = UiSession::new();

    let lists = manager.fetch_lists(&mut session).await;
    assert!(lists.is_empty());
    assert_eq!(*session.panel(), ListsPanel::LoginRequired);
    assert!(manager.dialogs().alerts.borrow().is_empty());
}

#[tokio::test]
async fn test_fetch_empty() {
    let manager = setup();
    let mut session = UiSession::new();
    manager.fetch_lists(&mut session).await;
    assert_eq!(*session.panel(), ListsPanel::Empty);
}

#[tokio::test]
async fn test_create_refetches() {
    let manager = setup();
    let mut session = UiSession::new();

    let created = manager.create_list(&mut session, "  Noir  ").await.unwrap();
    assert_eq!(created.name, "Noir");
    assert_eq!(
        manager.api().calls(),
        vec![Call::Create("Noir".to_string()), Call::ListAll]
    );
    assert_eq!(session.panel().cards().len(), 1);
}

#[tokio::test]
async fn test_create_blank_name_sends_nothing() {
    let manager = setup();
    let mut session = UiSession::new();

    for name in ["", "   ", "\t\n"] {
        let result = manager.create_list(&mut session, name).await;
        assert_eq!(result, Err(ListError::EmptyName));
    }
    assert!(manager.api().calls().is_empty());
    assert_eq!(manager.dialogs().alerts.borrow().len(), 3);
}

#[tokio::test]
async fn test_create_duplicate_surfaces_detail() {
    let manager = setup();
    manager.api().seed_list("Noir", &[]);
    let mut session = UiSession::new();

    let result = manager.create_list(&mut session, "Noir").await;
    assert!(matches!(result, Err(ListError::Api(ApiError::Rejected { status: 400, .. }))));
    let alert = manager.dialogs().last_alert().unwrap();
    assert!(alert.starts_with("Hubo un error al crear la lista: "));
    // no refetch after a failed mutation
    assert!(!manager.api().calls().contains(&Call::ListAll));
}

#[tokio::test]
async fn test_create_without_login_alerts() {
    let manager = setup();
    manager.api().set_logged_in(false);
    let mut session = UiSession::new();

    let err = manager.create_list(&mut session, "Noir").await.unwrap_err();
    assert!(err.is_auth());
    assert_eq!(
        manager.dialogs().last_alert().as_deref(),
        Some("Debes iniciar sesión para crear listas o tu sesión ha expirado.")
    );
}

#[tokio::test]
async fn test_open_and_rename_closes_modal() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[1, 2, 3, 4, 5]);
    let mut session = UiSession::new();

    manager.open_edit_modal(&mut session, id).await.unwrap();
    assert_eq!(session.editing_list(), Some(id));
    let modal = session.modal().unwrap();
    assert_eq!(modal.name, "Favs");
    assert_eq!(modal.tiles.len(), 5);
    assert_eq!(modal.count, 5);

    manager.api().clear_calls();
    let renamed = manager.rename_current(&mut session, "Best").await.unwrap();
    assert_eq!(renamed.name, "Best");
    assert!(session.modal().is_none());
    assert_eq!(session.editing_list(), None);
    assert_eq!(
        manager.api().calls(),
        vec![Call::Rename(id, "Best".to_string()), Call::ListAll]
    );
    assert_eq!(session.panel().cards()[0].name, "Best");
}

#[tokio::test]
async fn test_rename_blank_is_rejected() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[]);
    let mut session = UiSession::new();
    manager.open_edit_modal(&mut session, id).await.unwrap();
    manager.api().clear_calls();

    let result = manager.rename_list(&mut session, id, " ").await;
    assert_eq!(result, Err(ListError::EmptyName));
    assert!(manager.api().calls().is_empty());
    assert_eq!(session.editing_list(), Some(id));
}

#[tokio::test]
async fn test_rename_without_open_modal() {
    let manager = setup();
    let mut session = UiSession::new();
    let result = manager.rename_current(&mut session, "Best").await;
    assert_eq!(result, Err(ListError::NothingSelected));
}

#[tokio::test]
async fn test_open_modal_expired_session_redirects() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[]);
    manager.api().set_logged_in(false);
    let mut session = UiSession::new();

    assert!(manager.open_edit_modal(&mut session, id).await.is_err());
    assert!(session.modal().is_none());
    assert_eq!(*manager.dialogs().redirects.borrow(), vec!["/login/".to_string()]);
}

#[tokio::test]
async fn test_delete_removes_exactly_one_card() {
    let manager = setup();
    let keep = manager.api().seed_list("Keep", &[1]);
    let gone = manager.api().seed_list("Gone", &[2]);
    let also = manager.api().seed_list("Also", &[]);
    let mut session = UiSession::new();
    manager.fetch_lists(&mut session).await;
    assert_eq!(session.panel().cards().len(), 3);

    manager.delete_list(&mut session, gone).await.unwrap();

    let ids: Vec<u32> = session.panel().cards().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![keep, also]);
    assert_eq!(manager.dialogs().confirms.borrow().len(), 1);

    let refetched = manager.fetch_lists(&mut session).await;
    assert!(refetched.iter().all(|l| l.id != gone));
    assert_eq!(refetched.len(), 2);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[]);
    manager.dialogs().answer.set(false);
    let mut session = UiSession::new();

    let result = manager.delete_list(&mut session, id).await;
    assert_eq!(result, Err(ListError::Cancelled));
    assert!(manager.api().calls().is_empty());
    assert!(manager.api().stored(id).is_some());
}

#[tokio::test]
async fn test_delete_open_list_closes_modal() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[]);
    let mut session = UiSession::new();
    manager.open_edit_modal(&mut session, id).await.unwrap();

    manager.delete_list(&mut session, id).await.unwrap();
    assert!(session.modal().is_none());
    assert_eq!(*session.panel(), ListsPanel::Empty);
}

#[tokio::test]
async fn test_remove_movie_non_numeric_rejected_before_request() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[1]);
    let mut session = UiSession::new();

    for raw in ["abc", "", "1.5", "-3", "12abc"] {
        let result = manager.remove_movie(&mut session, id, raw).await;
        assert_eq!(result, Err(ListError::InvalidMovieId(raw.to_string())));
    }
    assert!(manager.api().calls().is_empty());
    assert!(manager.dialogs().confirms.borrow().is_empty());
    assert_eq!(manager.api().stored(id).unwrap().movies.len(), 1);
}

#[tokio::test]
async fn test_remove_movie_updates_modal_and_refetches() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[1, 2, 3]);
    let mut session = UiSession::new();
    manager.open_edit_modal(&mut session, id).await.unwrap();
    manager.api().clear_calls();

    manager.remove_movie(&mut session, id, " 2 ").await.unwrap();

    let modal = session.modal().unwrap();
    assert_eq!(modal.count, 2);
    assert!(modal.tiles.iter().all(|t| t.movie_id != 2));
    assert_eq!(manager.api().calls(), vec![Call::RemoveMovie(id, 2), Call::ListAll]);
    assert_eq!(session.panel().cards()[0].count_label, "2 Películas");
}

#[tokio::test]
async fn test_remove_movie_replayed_after_modal_closed() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[1, 2]);
    let mut live = UiSession::new();
    manager.open_edit_modal(&mut live, id).await.unwrap();
    live.take_changes();

    let mut action = live.clone();
    live.close_modal();
    manager.remove_movie(&mut action, id, "2").await.unwrap();
    live.replay(action.take_changes());

    assert!(live.modal().is_none());
    assert_eq!(live.panel().cards()[0].count_label, "1 Película");
}

#[tokio::test]
async fn test_initial_fetch_keeps_pick_made_while_loading() {
    let manager = setup();
    manager.api().seed_list("Favs", &[1]);
    let mut live = UiSession::new();

    let mut action = live.clone();
    live.begin_add(MoviePreview::new(4, "Dune"));
    manager.fetch_lists(&mut action).await;
    live.replay(action.take_changes());

    assert_eq!(live.pending_movie().map(|m| m.id), Some(4));
    assert_eq!(live.panel().cards().len(), 1);
}

#[tokio::test]
async fn test_remove_movie_not_in_list() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[1]);
    let mut session = UiSession::new();

    let result = manager.remove_movie(&mut session, id, "4").await;
    assert!(matches!(result, Err(ListError::Api(ApiError::Rejected { status: 400, .. }))));
    assert_eq!(
        manager.dialogs().last_alert().as_deref(),
        Some("Hubo un error al intentar quitar la película: La película no está en esta lista.")
    );
}

#[tokio::test]
async fn test_add_movie_leaves_local_state_alone() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[]);
    let mut session = UiSession::new();
    manager.fetch_lists(&mut session).await;
    let before = session.panel().clone();
    manager.api().clear_calls();

    manager.add_movie(id, 3).await.unwrap();
    assert_eq!(session.panel(), &before);
    assert_eq!(manager.api().calls(), vec![Call::AddMovie(id, 3)]);

    manager.fetch_lists(&mut session).await;
    assert_eq!(session.panel().cards()[0].count_label, "1 Película");
}

#[tokio::test]
async fn test_confirm_add_clears_pending_on_failure() {
    let manager = setup();
    let id = manager.api().seed_list("Favs", &[3]);
    let mut session = UiSession::new();

    session.begin_add(MoviePreview::new(3, "Chinatown"));
    let result = manager.confirm_add(&mut session, Some(id)).await;
    assert!(result.is_err());
    assert!(session.pending_movie().is_none());
    assert_eq!(
        manager.dialogs().last_alert().as_deref(),
        Some("Hubo un error al añadir la película: La película ya está en esta lista.")
    );
}

#[tokio::test]
async fn test_confirm_add_needs_list_and_movie() {
    let manager = setup();
    let mut session = UiSession::new();

    assert_eq!(manager.confirm_add(&mut session, Some(1)).await, Err(ListError::NothingSelected));
    session.begin_add(MoviePreview::new(1, "Alien"));
    assert_eq!(manager.confirm_add(&mut session, None).await, Err(ListError::NothingSelected));
    assert!(manager.api().calls().is_empty());
}

#[tokio::test]
async fn test_every_successful_mutation_refetches() {
    let manager = setup();
    let mut session = UiSession::new();

    let list = manager.create_list(&mut session, "Favs").await.unwrap();
    manager.api().add_movie(list.id, 1).await.unwrap();
    manager.open_edit_modal(&mut session, list.id).await.unwrap();
    manager.rename_list(&mut session, list.id, "Best").await.unwrap();
    manager.open_edit_modal(&mut session, list.id).await.unwrap();
    manager.remove_movie(&mut session, list.id, "1").await.unwrap();
    manager.delete_list(&mut session, list.id).await.unwrap();

    let calls = manager.api().calls();
    for (i, call) in calls.iter().enumerate() {
        if call.is_mutation() && !matches!(call, Call::AddMovie(..)) {
            assert_eq!(calls.get(i + 1), Some(&Call::ListAll), "no refetch after {:?}", call);
        }
    }
    assert_eq!(*session.panel(), ListsPanel::Empty);
}

#[tokio::test]
async fn test_load_add_targets() {
    let manager = setup();
    manager.api().seed_list("Favs", &[]);
    manager.api().seed_list("Later", &[]);

    let options = manager.load_add_targets().await.unwrap();
    let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Favs", "Later"]);

    manager.api().set_logged_in(false);
    assert!(manager.load_add_targets().await.unwrap_err().is_auth());
}

#[tokio::test]
async fn test_show_movie_then_pick_it() {
    let manager = setup();
    let mut session = UiSession::new();

    let details = manager.show_movie(4).await.unwrap();
    assert_eq!(details.title_text(), "Dune");
    assert_eq!(details.description_text(), "Sin descripción disponible.");

    session.begin_add(details.preview());
    assert_eq!(session.pending_movie().map(|m| m.id), Some(4));
}

#[tokio::test]
async fn test_show_unknown_movie_alerts() {
    let manager = setup();
    let result = manager.show_movie(99).await;
    assert!(matches!(result, Err(ListError::Api(ApiError::Rejected { status: 404, .. }))));
    assert_eq!(
        manager.dialogs().last_alert().as_deref(),
        Some("No se pudieron cargar los detalles de la película.")
    );
    assert_eq!(manager.api().calls(), vec![Call::FetchMovie(99)]);
}

#[test]
fn test_parse_movie_id() {
    assert_eq!(parse_movie_id("42"), Ok(42));
    assert_eq!(parse_movie_id(" 7 "), Ok(7));
    assert!(parse_movie_id("x7").is_err());
}
