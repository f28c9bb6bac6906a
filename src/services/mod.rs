pub mod clipboard;
pub mod snapshot_store;

pub use clipboard::ClipboardService;
pub use snapshot_store::SnapshotStore;
