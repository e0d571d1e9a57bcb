//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::Db;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the configuration and the lazy
/// document store handle; handlers share nothing else.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    db: Db,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// No connection is established here; the store handle connects on
    /// first use.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let db = Db::new(config.store.clone());
        Self {
            inner: Arc::new(AppStateInner { config, db }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the document store handle.
    #[must_use]
    pub fn db(&self) -> &Db {
        &self.inner.db
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::config::StoreConfig;

    #[test]
    fn test_config_accessor_round_trips() {
        let state = AppState::new(ApiConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 4000,
            store: StoreConfig {
                uri: SecretString::from("mongodb://localhost:27017"),
                database: "furniroDB".to_string(),
            },
            serverless: true,
            sentry_dsn: None,
        });

        // `main` reads the listen address and serverless flag through this
        // accessor after state construction.
        assert!(state.config().serverless);
        assert_eq!(state.config().socket_addr().port(), 4000);
        assert_eq!(state.config().store.database, "furniroDB");
    }
}
