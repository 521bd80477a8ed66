//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod credential_store;
pub mod entry_store;
pub mod json_file;
pub mod paths;

pub use config::Config;
pub use credential_store::CredentialStore;
pub use entry_store::EntryStore;
pub use paths::DiaryPaths;
