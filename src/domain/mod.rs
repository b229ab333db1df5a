//! Domain layer - Entry model, key validation and file layout

pub mod entry;
pub mod entry_key;
pub mod file_layout;
pub mod time_ref;

pub use entry::{normalize_content, Backend, Entry};
pub use entry_key::EntryKey;
pub use time_ref::TimeReference;
