//! Output formatting utilities

use crate::domain::{DiaryEntry, Section};

/// Format one entry as a titled block
pub fn format_entry(entry: &DiaryEntry) -> String {
    let mut output = format!("\n==== Entry for {} ====\n", entry.date);
    for section in Section::ALL {
        output.push_str(&format!("{}: {}\n", section.label(), entry.section(section)));
    }
    output
}

/// Format several entries, or a placeholder when there are none
pub fn format_entry_list<'a, I>(entries: I, empty_message: &str) -> String
where
    I: IntoIterator<Item = &'a DiaryEntry>,
{
    let output: String = entries.into_iter().map(format_entry).collect();
    if output.is_empty() {
        format!("{}\n", empty_message)
    } else {
        output
    }
}
