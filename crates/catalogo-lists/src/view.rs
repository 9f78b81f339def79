//! View Models
//!
//! Pure `MovieList -> view` mappings consumed by whatever renders them.

use crate::domain::MovieList;

/// Slots in a list card's cover collage
pub const COLLAGE_SLOTS: usize = 4;

/// Shown when a collage movie has no poster
pub const COVER_FALLBACK: &str = "https://placehold.co/100x150/000/fff?text=No+Cover";

/// Shown when a movie tile in the edit modal has no poster
pub const TILE_FALLBACK: &str = "https://placehold.co/120x180/444444/FFFFFF?text=";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverSlot {
    Poster { src: String, alt: String },
    Placeholder,
}

impl CoverSlot {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, CoverSlot::Placeholder)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCardView {
    pub id: u32,
    pub name: String,
    /// Always `COLLAGE_SLOTS` long
    pub collage: Vec<CoverSlot>,
    pub count_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieTile {
    pub movie_id: u32,
    pub title: String,
    pub poster_src: String,
}

/// Contents of the edit modal for one list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModalView {
    pub list_id: u32,
    pub name: String,
    pub tiles: Vec<MovieTile>,
    pub count: u32,
}

impl EditModalView {
    /// Drop a tile and decrement the displayed count.
    /// Returns false when no tile had that movie.
    pub fn remove_tile(&mut self, movie_id: u32) -> bool {
        let before = self.tiles.len();
        self.tiles.retain(|t| t.movie_id != movie_id);
        let removed = self.tiles.len() != before;
        if removed {
            self.count = self.count.saturating_sub(1);
        }
        removed
    }
}

/// A list offered as destination in the add-to-list dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOption {
    pub id: u32,
    pub name: String,
}

/// What the list container currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListsPanel {
    #[default]
    Loading,
    Empty,
    Cards(Vec<ListCardView>),
    LoginRequired,
    Failed,
}

impl ListsPanel {
    pub fn from_lists(lists: &[MovieList]) -> Self {
        if lists.is_empty() {
            ListsPanel::Empty
        } else {
            ListsPanel::Cards(lists.iter().map(list_card).collect())
        }
    }

    pub fn cards(&self) -> &[ListCardView] {
        match self {
            ListsPanel::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Remove the card of one list. Returns false when it was not shown.
    pub fn remove_card(&mut self, list_id: u32) -> bool {
        let ListsPanel::Cards(cards) = self else {
            return false;
        };
        let before = cards.len();
        cards.retain(|c| c.id != list_id);
        let removed = cards.len() != before;
        if cards.is_empty() {
            *self = ListsPanel::Empty;
        }
        removed
    }

    /// Status line shown instead of cards
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ListsPanel::Loading => Some("Cargando tus listas..."),
            ListsPanel::Empty => Some("Aún no tienes listas. ¡Crea una ahora!"),
            ListsPanel::LoginRequired => Some("Por favor, inicia sesión para ver tus listas."),
            ListsPanel::Failed => {
                Some("Hubo un error al cargar tus listas. Por favor, inténtalo de nuevo.")
            }
            ListsPanel::Cards(_) => None,
        }
    }
}

pub fn count_label(count: u32) -> String {
    if count == 1 {
        "1 Película".to_string()
    } else {
        format!("{} Películas", count)
    }
}

pub fn list_card(list: &MovieList) -> ListCardView {
    let mut collage: Vec<CoverSlot> = list
        .movies
        .iter()
        .take(COLLAGE_SLOTS)
        .map(|m| CoverSlot::Poster {
            src: m.poster_url.clone().unwrap_or_else(|| COVER_FALLBACK.to_string()),
            alt: m.title.clone(),
        })
        .collect();
    collage.resize(COLLAGE_SLOTS, CoverSlot::Placeholder);

    ListCardView {
        id: list.id,
        name: list.name.clone(),
        collage,
        count_label: count_label(list.count()),
    }
}

pub fn edit_modal(list: &MovieList) -> EditModalView {
    EditModalView {
        list_id: list.id,
        name: list.name.clone(),
        tiles: list
            .movies
            .iter()
            .map(|m| MovieTile {
                movie_id: m.id,
                title: m.title.clone(),
                poster_src: m.poster_url.clone().unwrap_or_else(|| TILE_FALLBACK.to_string()),
            })
            .collect(),
        count: list.count(),
    }
}

pub fn list_option(list: &MovieList) -> ListOption {
    ListOption {
        id: list.id,
        name: list.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MoviePreview;

    fn favs() -> MovieList {
        MovieList {
            id: 5,
            name: "Favs".to_string(),
            movies: vec![
                MoviePreview::with_poster(1, "A", "http://img/a.jpg"),
                MoviePreview::new(2, "B"),
            ],
            movie_count: None,
        }
    }

    #[test]
    fn test_collage_pads_with_placeholders() {
        let card = list_card(&favs());
        assert_eq!(card.id, 5);
        assert_eq!(card.collage.len(), COLLAGE_SLOTS);
        assert_eq!(card.collage.iter().filter(|s| !s.is_placeholder()).count(), 2);
        assert_eq!(card.collage.iter().filter(|s| s.is_placeholder()).count(), 2);
        assert_eq!(card.count_label, "2 Películas");
        assert_eq!(
            card.collage[1],
            CoverSlot::Poster { src: COVER_FALLBACK.to_string(), alt: "B".to_string() }
        );
    }

    #[test]
    fn test_collage_caps_at_four() {
        let mut list = favs();
        list.movies = (1..=6).map(|i| MoviePreview::new(i, format!("M{}", i))).collect();
        list.movie_count = Some(9);
        let card = list_card(&list);
        assert_eq!(card.collage.len(), COLLAGE_SLOTS);
        assert!(card.collage.iter().all(|s| !s.is_placeholder()));
        assert_eq!(card.count_label, "9 Películas");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 Películas");
        assert_eq!(count_label(1), "1 Película");
    }

    #[test]
    fn test_edit_modal_remove_tile() {
        let mut modal = edit_modal(&favs());
        assert_eq!(modal.count, 2);
        assert_eq!(modal.tiles[1].poster_src, TILE_FALLBACK);

        assert!(modal.remove_tile(1));
        assert!(!modal.remove_tile(1));
        assert_eq!(modal.count, 1);
        assert_eq!(modal.tiles.len(), 1);
    }

    #[test]
    fn test_remove_last_card_shows_empty() {
        let mut panel = ListsPanel::from_lists(&[favs()]);
        assert_eq!(panel.cards().len(), 1);
        assert!(!panel.remove_card(99));
        assert!(panel.remove_card(5));
        assert_eq!(panel, ListsPanel::Empty);
        assert!(panel.message().is_some());
    }
}
