//! Infrastructure layer - Storage backends, configuration and discovery

pub mod availability;
pub mod config;
pub mod file_store;
pub mod relational_store;
pub mod repository;
pub mod store;

pub use availability::{BackendAvailability, BackendMode};
pub use config::Config;
pub use file_store::FileStore;
pub use relational_store::RelationalStore;
pub use repository::{DiaryRepository, FileSystemRepository};
pub use store::EntryStore;
