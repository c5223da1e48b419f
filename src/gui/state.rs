use std::sync::Arc;

use crate::{analyzer::Analyzer, config::ReviewConfig, labels::Labels, models::Profile};

/// State shared by every screen: settings and the analyzer in use
pub struct AppState {
    pub config: ReviewConfig,
    pub analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl AppState {
    pub fn new(config: ReviewConfig, analyzer: Arc<dyn Analyzer>) -> Self {
        Self { config, analyzer }
    }

    pub fn profile(&self) -> Profile {
        self.config.profile()
    }

    pub fn labels(&self) -> &'static Labels {
        Labels::for_locale(self.config.locale)
    }
}
