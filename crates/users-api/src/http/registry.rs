use crate::store::UserStore;
use std::sync::Arc;

/// Shared handler state: the injected stores.
#[derive(Clone)]
pub struct AppRegistry {
    user_store: Arc<dyn UserStore>,
}

impl AppRegistry {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    pub fn user_store(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.user_store)
    }
}
