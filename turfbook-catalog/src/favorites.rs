use turfbook_shared::{Turf, User};

/// Shown on the favorites page when the signed-in user has none
pub const EMPTY_FAVORITES_MESSAGE: &str = "You haven't added any turfs to your favorites yet.";

/// Turfs the user has marked, in catalog order.
///
/// `None` means there is nobody signed in and the page renders nothing.
/// Favorite ids that are not in the catalog are skipped.
pub fn favorites<'a>(turfs: &'a [Turf], user: Option<&User>) -> Option<Vec<&'a Turf>> {
    let user = user?;
    Some(turfs.iter().filter(|turf| user.is_favorite(&turf.id)).collect())
}

/// Heart state for a card; always false without a user
pub fn is_favorite(user: Option<&User>, turf_id: &str) -> bool {
    user.map(|u| u.is_favorite(turf_id)).unwrap_or(false)
}
