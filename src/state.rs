use crate::catalog::Catalog;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: Store::new(),
            catalog: Catalog::from_env(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
