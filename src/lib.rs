//! diary - Terminal daily diary
//!
//! A single-user command-line diary. Users log in against a local credential
//! store and keep one JSON file of dated entries, each split into morning,
//! afternoon and evening sections.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
