use async_trait::async_trait;

use crate::domain::snapshot::DraftSnapshot;
use crate::error::AppResult;

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// `None` when nothing has been saved yet.
    async fn load(&self) -> AppResult<Option<DraftSnapshot>>;
    async fn save(&self, snapshot: &DraftSnapshot) -> AppResult<()>;
}
