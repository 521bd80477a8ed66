//! Domain layer - Diary models and the rules they enforce

pub mod credential;
pub mod date_key;
pub mod entry;
pub mod section;

pub use credential::Credential;
pub use date_key::{format_date_key, parse_date_key, RangeOrder};
pub use entry::DiaryEntry;
pub use section::Section;
