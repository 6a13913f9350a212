use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::extractors::identity::IdentityResolver;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: Arc<dyn IdentityResolver>,
    pub config: AppConfig,
}
