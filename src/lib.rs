//! diaro - dated diary entries kept in plain files and an optional database
//!
//! Entries are keyed by calendar date. Every write lands in a text file; when
//! a database is configured and reachable at startup, the same write is
//! upserted there too. Reads prefer the database copy, while listings and
//! searches report each backend separately so divergence stays visible.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::PersistenceFacade;
pub use error::DiaroError;
