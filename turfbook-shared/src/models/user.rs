use serde::{Deserialize, Serialize};

/// The single signed-in identity. This is also the persisted session record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub favorites: Vec<String>,
    /// Never written by any operation; kept so persisted records keep their shape.
    #[serde(default)]
    pub bookings: Vec<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            favorites: Vec::new(),
            bookings: Vec::new(),
        }
    }

    pub fn is_favorite(&self, turf_id: &str) -> bool {
        self.favorites.iter().any(|id| id == turf_id)
    }

    /// Returns a copy with `turf_id` appended to favorites.
    /// Favorites behave as a set: an id already present is not added again.
    pub fn with_favorite(&self, turf_id: &str) -> Self {
        let mut updated = self.clone();
        if !updated.is_favorite(turf_id) {
            updated.favorites.push(turf_id.to_string());
        }
        updated
    }

    /// Returns a copy with every occurrence of `turf_id` removed from favorites.
    pub fn without_favorite(&self, turf_id: &str) -> Self {
        let mut updated = self.clone();
        updated.favorites.retain(|id| id != turf_id);
        updated
    }
}
