use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub port: u16,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .field("port", &self.port)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, port: u16) -> Self {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(pool, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            port,
        }
    }
}
