use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ClipboardService, SnapshotStore};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: Arc<dyn SnapshotStore>,
    pub clipboard: Arc<dyn ClipboardService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn SnapshotStore>,
        clipboard: Arc<dyn ClipboardService>,
    ) -> Self {
        Self {
            config,
            store,
            clipboard,
        }
    }
}
