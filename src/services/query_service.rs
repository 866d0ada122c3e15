//! Entry-point lookups for the query root.
//!
//! Every lookup is a first-match scan; a miss yields `None`.

use crate::dao::{
    catalog::Catalog,
    models::{AuthorEntity, GameEntity, ReviewEntity},
};

/// All games, in insertion order.
pub fn list_games(catalog: &Catalog) -> &[GameEntity] {
    catalog.games()
}

/// First game with the given id.
pub fn get_game<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a GameEntity> {
    catalog.games().iter().find(|game| game.id == id)
}

/// All authors, in insertion order.
pub fn list_authors(catalog: &Catalog) -> &[AuthorEntity] {
    catalog.authors()
}

/// First author with the given id.
pub fn get_author<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a AuthorEntity> {
    catalog.authors().iter().find(|author| author.id == id)
}

/// All reviews, in insertion order.
pub fn list_reviews(catalog: &Catalog) -> &[ReviewEntity] {
    catalog.reviews()
}

/// First review with the given id.
pub fn get_review<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a ReviewEntity> {
    catalog.reviews().iter().find(|review| review.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_by_id_finds_seed_rows() {
        let catalog = Catalog::default();
        assert_eq!(get_game(&catalog, "3").unwrap().title, "Elden Ring");
        assert_eq!(get_author(&catalog, "2").unwrap().name, "yoshi");
        assert_eq!(get_review(&catalog, "4").unwrap().rating, 5);
    }

    #[test]
    fn unknown_ids_are_absent() {
        let catalog = Catalog::default();
        assert!(get_game(&catalog, "99").is_none());
        assert!(get_author(&catalog, "").is_none());
        assert!(get_review(&catalog, "abc").is_none());
    }

    #[test]
    fn lists_keep_insertion_order() {
        let catalog = Catalog::default();
        let ids: Vec<_> = list_games(&catalog).iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert_eq!(list_authors(&catalog).len(), 3);
        assert_eq!(list_reviews(&catalog).len(), 7);
    }
}
