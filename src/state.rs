use std::sync::Arc;

use crate::config::SiteConfig;
use crate::gateway::CourseGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn CourseGateway>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn CourseGateway>, site: SiteConfig) -> Self {
        Self {
            gateway,
            site: Arc::new(site),
        }
    }
}
