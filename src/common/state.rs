use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no database is configured (or the startup connect
    /// failed); every trends request then serves mock data.
    pub db: Option<Arc<DatabaseConnection>>,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(db: Option<DatabaseConnection>, config: Config) -> Self {
        Self {
            db: db.map(Arc::new),
            config: Arc::new(config),
        }
    }
}
