use serde::Serialize;
use crate::auth::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Route {
    Home,
    Favorites,
    Profile,
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Favorites => "/favorites",
            Route::Profile => "/profile",
            Route::Login => "/login",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavItem {
    Link { label: &'static str, path: &'static str },
    Logout { label: &'static str },
}

impl NavItem {
    fn link(label: &'static str, route: Route) -> Self {
        NavItem::Link { label, path: route.path() }
    }
}

/// Header navigation for the given session
pub fn nav_links(state: &AuthState) -> Vec<NavItem> {
    match state {
        AuthState::Anonymous => vec![NavItem::link("Login", Route::Login)],
        AuthState::Authenticated(_) => vec![
            NavItem::link("Favorites", Route::Favorites),
            NavItem::link("Profile", Route::Profile),
            NavItem::Logout { label: "Logout" },
        ],
    }
}
