use serde::Serialize;
use turfbook_catalog::Catalog;
use turfbook_shared::User;

/// Fixed label the profile page prints under every recent booking
pub const RECENT_BOOKING_LABEL: &str = "Today, 6:00 PM";

const RECENT_BOOKING_COUNT: usize = 2;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub recent_bookings: Vec<RecentBooking>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentBooking {
    pub turf_id: String,
    pub name: String,
    pub location: String,
    pub image: String,
    pub when: &'static str,
}

impl ProfileView {
    /// `None` when nobody is signed in.
    ///
    /// Recent bookings are the first catalog entries, not `user.bookings`:
    /// bookings are never recorded, so the page shows placeholders.
    pub fn build(catalog: &Catalog, user: Option<&User>) -> Option<Self> {
        let user = user?;

        let recent_bookings = catalog
            .turfs()
            .iter()
            .take(RECENT_BOOKING_COUNT)
            .map(|turf| RecentBooking {
                turf_id: turf.id.clone(),
                name: turf.name.clone(),
                location: turf.location.clone(),
                image: turf.image.clone(),
                when: RECENT_BOOKING_LABEL,
            })
            .collect();

        Some(Self {
            name: user.name.clone(),
            email: user.email.clone(),
            recent_bookings,
        })
    }
}
