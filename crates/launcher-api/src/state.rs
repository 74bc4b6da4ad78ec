//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use launcher_core::config::AppConfig;
use launcher_core::result::AppResult;
use launcher_service::{
    DispatchService, SelectionService, SettingsLocations, SettingsStore, SubgenClient,
};
use launcher_storage::{PathGuard, TreeBuilder};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Content tree enumeration
    pub tree_builder: Arc<TreeBuilder>,
    /// Persisted server settings
    pub settings_store: Arc<SettingsStore>,
    /// Selection validation
    pub selection_service: Arc<SelectionService>,
    /// Remote batch dispatch
    pub dispatch_service: Arc<DispatchService>,
}

impl AppState {
    /// Wires every service from configuration.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let guard = PathGuard::new(config.paths.content_root())?;
        let tree_builder = Arc::new(TreeBuilder::new(guard.root()).with_limits(config.tree));
        let settings_store = Arc::new(SettingsStore::new(SettingsLocations::from_config(
            &config.paths,
        )));
        let selection_service = Arc::new(SelectionService::new(guard));
        let client = SubgenClient::new(&config.remote)?;
        let dispatch_service = Arc::new(DispatchService::new(
            Arc::clone(&selection_service),
            Arc::clone(&settings_store),
            client,
            config.remote.container_prefix.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            tree_builder,
            settings_store,
            selection_service,
            dispatch_service,
        })
    }
}
