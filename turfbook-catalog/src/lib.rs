pub mod catalog;
pub mod search;
pub mod favorites;

pub use catalog::{Catalog, CatalogError, SPORT_OPTIONS};
pub use search::{filter, SearchFilters, EMPTY_SEARCH_MESSAGE};
pub use favorites::{favorites, is_favorite, EMPTY_FAVORITES_MESSAGE};
