use tracing::{debug, info, warn};

use crate::composer;
use crate::context::AppContext;
use crate::domain::request::{DraftInput, DraftRequest};
use crate::domain::snapshot::{DraftSnapshot, OutputKind};
use crate::error::AppResult;

pub struct DraftOutcome {
    pub snapshot: DraftSnapshot,
    pub saved: bool,
}

impl DraftOutcome {
    pub fn status_message(&self) -> &'static str {
        if self.saved {
            "Generated. Copy the draft or the AI prompt."
        } else {
            "Generated without saving; the last draft is unchanged."
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Copied(OutputKind),
    NothingToCopy,
}

impl CopyStatus {
    pub fn message(&self) -> &'static str {
        match self {
            CopyStatus::Copied(kind) => kind.copied_message(),
            CopyStatus::NothingToCopy => "Nothing to copy.",
        }
    }
}

pub async fn generate_draft(
    ctx: &AppContext,
    input: DraftInput,
    persist: bool,
) -> AppResult<DraftOutcome> {
    let request = DraftRequest::from_input(&input);
    debug!(
        message_type = request.message_type.as_str(),
        scenario = request.scenario.as_str(),
        tone = request.tone.as_str(),
        "composing draft"
    );

    let composed = composer::compose_all(&request);
    let snapshot = DraftSnapshot::new(input, composed);

    if persist {
        ctx.store.save(&snapshot).await?;
    }

    Ok(DraftOutcome {
        snapshot,
        saved: persist,
    })
}

pub async fn restore_last(ctx: &AppContext) -> AppResult<Option<DraftSnapshot>> {
    let snapshot = ctx.store.load().await?;
    if snapshot.is_none() {
        info!("no previous draft to restore");
    }
    Ok(snapshot)
}

/// Blanks the saved free-text fields and outputs; selectors and author survive.
pub async fn clear_last(ctx: &AppContext) -> AppResult<DraftSnapshot> {
    let input = match ctx.store.load().await? {
        Some(snapshot) => snapshot.input.cleared(),
        None => ctx.config.base_input(),
    };
    let snapshot = DraftSnapshot {
        input,
        ..DraftSnapshot::default()
    };
    ctx.store.save(&snapshot).await?;
    Ok(snapshot)
}

pub async fn copy_text(ctx: &AppContext, kind: OutputKind, text: &str) -> AppResult<CopyStatus> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(CopyStatus::NothingToCopy);
    }
    ctx.clipboard.write_text(text).await.inspect_err(|err| {
        warn!(error = %err, "clipboard write rejected");
    })?;
    Ok(CopyStatus::Copied(kind))
}

pub async fn copy_last(ctx: &AppContext, kind: OutputKind) -> AppResult<CopyStatus> {
    match ctx.store.load().await? {
        Some(snapshot) => copy_text(ctx, kind, snapshot.output(kind)).await,
        None => Ok(CopyStatus::NothingToCopy),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::config::{AppConfig, StoredConfig};
    use crate::error::AppError;
    use crate::services::{ClipboardService, SnapshotStore};

    #[derive(Default)]
    struct MemoryStore {
        snapshot: Mutex<Option<DraftSnapshot>>,
    }

    #[async_trait]
    impl SnapshotStore for MemoryStore {
        async fn load(&self) -> AppResult<Option<DraftSnapshot>> {
            Ok(self.snapshot.lock().unwrap().clone())
        }

        async fn save(&self, snapshot: &DraftSnapshot) -> AppResult<()> {
            *self.snapshot.lock().unwrap() = Some(snapshot.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Mutex<Vec<String>>,
        reject: bool,
    }

    #[async_trait]
    impl ClipboardService for RecordingClipboard {
        async fn write_text(&self, text: &str) -> AppResult<()> {
            if self.reject {
                return Err(AppError::Clipboard("permission denied".to_string()));
            }
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn context(
        store: Arc<MemoryStore>,
        clipboard: Arc<RecordingClipboard>,
    ) -> AppContext {
        let stored = StoredConfig {
            default_author: Some("Alex".to_string()),
            ..StoredConfig::default()
        };
        let config = AppConfig::from_stored(stored, None, PathBuf::from("/tmp"));
        AppContext::new(config, store, clipboard)
    }

    fn ticket_input() -> DraftInput {
        DraftInput {
            msg_type: "ticket".to_string(),
            scenario: "password_reset".to_string(),
            ticket: "T-100".to_string(),
            recipient: "Sam".to_string(),
            your_name: "Alex".to_string(),
            ..DraftInput::default()
        }
    }

    #[tokio::test]
    async fn generate_saves_snapshot() {
        let store = Arc::new(MemoryStore::default());
        let ctx = context(store.clone(), Arc::new(RecordingClipboard::default()));

        let outcome = generate_draft(&ctx, ticket_input(), true).await.unwrap();
        assert!(outcome.saved);
        assert_eq!(
            outcome.status_message(),
            "Generated. Copy the draft or the AI prompt."
        );
        assert!(outcome.snapshot.draft.starts_with("[Password reset] Internal update"));
        assert!(outcome.snapshot.prompt.contains("Ticket: T-100"));

        let restored = restore_last(&ctx).await.unwrap();
        assert_eq!(restored, Some(outcome.snapshot));
    }

    #[tokio::test]
    async fn generate_without_persist_leaves_store_alone() {
        let store = Arc::new(MemoryStore::default());
        let ctx = context(store.clone(), Arc::new(RecordingClipboard::default()));

        let outcome = generate_draft(&ctx, ticket_input(), false).await.unwrap();
        assert!(!outcome.saved);
        assert_eq!(
            outcome.status_message(),
            "Generated without saving; the last draft is unchanged."
        );
        assert!(restore_last(&ctx).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_keeps_selectors_and_drops_outputs() {
        let store = Arc::new(MemoryStore::default());
        let ctx = context(store.clone(), Arc::new(RecordingClipboard::default()));
        generate_draft(&ctx, ticket_input(), true).await.unwrap();

        let cleared = clear_last(&ctx).await.unwrap();
        assert_eq!(cleared.input.msg_type, "ticket");
        assert_eq!(cleared.input.your_name, "Alex");
        assert!(cleared.input.ticket.is_empty());
        assert!(cleared.input.recipient.is_empty());
        assert!(cleared.draft.is_empty());
        assert!(cleared.prompt.is_empty());
        assert_eq!(restore_last(&ctx).await.unwrap(), Some(cleared));
    }

    #[tokio::test]
    async fn clear_without_history_uses_config_defaults() {
        let store = Arc::new(MemoryStore::default());
        let ctx = context(store, Arc::new(RecordingClipboard::default()));

        let cleared = clear_last(&ctx).await.unwrap();
        assert_eq!(cleared.input.your_name, "Alex");
        assert_eq!(cleared.input.msg_type, "email");
    }

    #[tokio::test]
    async fn copy_last_writes_trimmed_output() {
        let store = Arc::new(MemoryStore::default());
        let clipboard = Arc::new(RecordingClipboard::default());
        let ctx = context(store, clipboard.clone());
        let outcome = generate_draft(&ctx, ticket_input(), true).await.unwrap();

        let status = copy_last(&ctx, OutputKind::Prompt).await.unwrap();
        assert_eq!(status, CopyStatus::Copied(OutputKind::Prompt));
        assert_eq!(status.message(), "AI prompt copied.");
        assert_eq!(
            clipboard.writes.lock().unwrap().as_slice(),
            [outcome.snapshot.prompt.trim().to_string()]
        );
    }

    #[tokio::test]
    async fn copy_reports_nothing_for_blank_text() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let ctx = context(Arc::new(MemoryStore::default()), clipboard.clone());

        let status = copy_text(&ctx, OutputKind::Draft, "  \n ").await.unwrap();
        assert_eq!(status, CopyStatus::NothingToCopy);
        assert_eq!(copy_last(&ctx, OutputKind::Draft).await.unwrap(), CopyStatus::NothingToCopy);
        assert!(clipboard.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_clipboard_surfaces_error() {
        let clipboard = Arc::new(RecordingClipboard {
            reject: true,
            ..RecordingClipboard::default()
        });
        let ctx = context(Arc::new(MemoryStore::default()), clipboard);

        let err = copy_text(&ctx, OutputKind::Draft, "Hello").await.unwrap_err();
        assert!(matches!(err, AppError::Clipboard(_)));
    }
}
