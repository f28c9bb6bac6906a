pub mod clipboard;
pub mod file_store;
