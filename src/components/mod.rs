//! UI Components
//!
//! Reusable Leptos components.

mod list_card;
mod list_grid;
mod create_list_form;
mod edit_list_modal;
mod movie_catalog;
mod movie_details_modal;
mod add_to_list_modal;

pub use list_card::ListCard;
pub use list_grid::ListGrid;
pub use create_list_form::CreateListForm;
pub use edit_list_modal::EditListModal;
pub use movie_catalog::MovieCatalog;
pub use movie_details_modal::MovieDetailsModal;
pub use add_to_list_modal::AddToListModal;
