//! Bundled starter database, used when no snapshot is available.

use super::database::ItemDatabase;
use super::item::Item;

/// The two starter films.
#[must_use]
pub fn default_items() -> Vec<Item> {
    vec![
        Item::with_attributes(
            "The Godfather",
            [
                "country_US",
                "year_1972",
                "genre_crime",
                "director_Coppola",
                "actor_Brando",
                "studio_Paramount",
                "based_on_book",
                "award_Oscar",
                "sequels",
                "mafia",
            ],
        ),
        Item::with_attributes(
            "Titanic",
            [
                "country_US",
                "year_1997",
                "genre_romance",
                "director_Cameron",
                "actor_DiCaprio",
                "studio_Fox",
                "based_on_true_events",
                "award_Oscar",
                "ship",
                "disaster",
            ],
        ),
    ]
}

impl ItemDatabase {
    /// Database holding the bundled starter films.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_items(default_items()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let items = default_items();
        assert_eq!(items.len(), 2);
        assert!(super::super::database::validate(&items).is_ok());
        assert!(items.iter().all(|i| i.is_set("country_US") && i.is_set("award_Oscar")));
    }

    #[test]
    fn test_with_defaults() {
        let db = ItemDatabase::with_defaults();
        assert_eq!(db.len(), 2);
        assert_eq!(db.items(), &default_items()[..]);
        assert_eq!(db.stats().attributes, 18);
    }
}
