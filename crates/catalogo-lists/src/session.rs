//! UI Session
//!
//! Everything the list screens hold between user gestures: the rendered
//! panel, the open edit modal and the single selection slot.
//!
//! Every mutation is also journaled as a `SessionChange`. An async action
//! works on a copy of the session and only its journal is replayed onto the
//! live one, so a completion never reverts what the user did meanwhile.

use crate::domain::MoviePreview;
use crate::view::{EditModalView, ListsPanel};

/// Editing a list and picking a destination for a movie exclude each other
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Idle,
    EditingList(u32),
    PendingAdd(MoviePreview),
}

/// One recorded mutation. Changes tied to a list or movie only apply while
/// that list or movie is still the one shown.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionChange {
    Panel(ListsPanel),
    RemoveCard(u32),
    OpenModal(EditModalView),
    CloseModal(u32),
    RemoveTile { list_id: u32, movie_id: u32 },
    BeginAdd(MoviePreview),
    ClearPending(u32),
}

#[derive(Debug, Clone, Default)]
pub struct UiSession {
    panel: ListsPanel,
    modal: Option<EditModalView>,
    selection: Selection,
    changes: Vec<SessionChange>,
}

impl UiSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> &ListsPanel {
        &self.panel
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn modal(&self) -> Option<&EditModalView> {
        self.modal.as_ref()
    }

    /// `currentListId`
    pub fn editing_list(&self) -> Option<u32> {
        match self.selection {
            Selection::EditingList(id) => Some(id),
            _ => None,
        }
    }

    /// `selectedMovieId`
    pub fn pending_movie(&self) -> Option<&MoviePreview> {
        match &self.selection {
            Selection::PendingAdd(movie) => Some(movie),
            _ => None,
        }
    }

    // ========================
    // Mutations
    // ========================

    pub fn set_panel(&mut self, panel: ListsPanel) {
        self.record(SessionChange::Panel(panel));
    }

    pub fn remove_card(&mut self, list_id: u32) {
        self.record(SessionChange::RemoveCard(list_id));
    }

    /// Show the edit modal; drops any pending add
    pub fn open_modal(&mut self, modal: EditModalView) {
        self.record(SessionChange::OpenModal(modal));
    }

    pub fn close_modal(&mut self) {
        if let Some(id) = self.modal.as_ref().map(|m| m.list_id) {
            self.record(SessionChange::CloseModal(id));
        }
    }

    /// Close the edit modal only if it shows `list_id`
    pub fn close_modal_of(&mut self, list_id: u32) {
        self.record(SessionChange::CloseModal(list_id));
    }

    /// Drop a tile from the edit modal if it still shows `list_id`
    pub fn remove_tile(&mut self, list_id: u32, movie_id: u32) {
        self.record(SessionChange::RemoveTile { list_id, movie_id });
    }

    /// Remember a movie awaiting a destination list; closes the edit modal
    pub fn begin_add(&mut self, movie: MoviePreview) {
        self.record(SessionChange::BeginAdd(movie));
    }

    pub fn clear_pending(&mut self) {
        if let Some(id) = self.pending_movie().map(|m| m.id) {
            self.record(SessionChange::ClearPending(id));
        }
    }

    // ========================
    // Journal
    // ========================

    /// Drain the changes recorded since the last call
    pub fn take_changes(&mut self) -> Vec<SessionChange> {
        std::mem::take(&mut self.changes)
    }

    /// Apply changes recorded on another copy of the session
    pub fn replay(&mut self, changes: Vec<SessionChange>) {
        for change in changes {
            self.apply(change);
        }
    }

    fn record(&mut self, change: SessionChange) {
        self.apply(change.clone());
        self.changes.push(change);
    }

    fn apply(&mut self, change: SessionChange) {
        match change {
            SessionChange::Panel(panel) => self.panel = panel,
            SessionChange::RemoveCard(id) => {
                self.panel.remove_card(id);
            }
            SessionChange::OpenModal(modal) => {
                self.selection = Selection::EditingList(modal.list_id);
                self.modal = Some(modal);
            }
            SessionChange::CloseModal(id) => {
                if self.modal.as_ref().is_some_and(|m| m.list_id == id) {
                    self.modal = None;
                }
                if self.selection == Selection::EditingList(id) {
                    self.selection = Selection::Idle;
                }
            }
            SessionChange::RemoveTile { list_id, movie_id } => {
                if let Some(modal) = self.modal.as_mut().filter(|m| m.list_id == list_id) {
                    modal.remove_tile(movie_id);
                }
            }
            SessionChange::BeginAdd(movie) => {
                self.modal = None;
                self.selection = Selection::PendingAdd(movie);
            }
            SessionChange::ClearPending(id) => {
                if self.pending_movie().is_some_and(|m| m.id == id) {
                    self.selection = Selection::Idle;
                }
            }
        }
    }
}
