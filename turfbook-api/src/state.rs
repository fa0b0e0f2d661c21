use std::sync::Arc;
use turfbook_catalog::Catalog;
use turfbook_core::AuthStore;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub auth: Arc<AuthStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, auth: AuthStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            auth: Arc::new(auth),
        }
    }
}
