//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod persistence;

pub use manage_config::ConfigService;
pub use persistence::{DeleteResult, Listing, PersistenceFacade, SearchResult, WriteResult};
