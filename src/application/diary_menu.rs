//! Diary menu use cases (add, view, list, delete, update)

use crate::cli::{format_entry, format_entry_list, Prompter};
use crate::domain::{format_date_key, Section};
use crate::error::Result;
use crate::infrastructure::{Config, EntryStore};
use chrono::{Local, NaiveDate};
use std::cmp::Ordering;
use std::io::{BufRead, Write};

const INVALID_SECTION: &str = "Invalid section. Must be morning, afternoon, or evening.";

/// Whether the menu loop should keep going after a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Interactive menu over one user's entry store
pub struct DiaryMenu {
    store: EntryStore,
    config: Config,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl DiaryMenu {
    pub fn new(store: EntryStore, config: Config) -> Self {
        DiaryMenu {
            store,
            config,
            today: local_today,
        }
    }

    /// Replace the clock used for "today"; it is read again by every action
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run until the user picks Exit or the input runs out
    pub fn run<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<()> {
        loop {
            Self::display_menu(prompter, self.config.latest_days)?;

            let Some(choice) = prompter.ask("Select an option: ")? else {
                return Ok(());
            };

            let step = match choice.as_str() {
                "1" => self.add_today(prompter)?,
                "2" => self.add_specific_date(prompter)?,
                "3" => self.view_entry(prompter)?,
                "4" => self.list_by_period(prompter)?,
                "5" => self.list_latest(prompter)?,
                "6" => self.list_all(prompter)?,
                "7" => self.delete_entry(prompter)?,
                "8" => self.update_entry(prompter)?,
                "9" => {
                    prompter.say("Thank you for using Daily Diary. Goodbye!")?;
                    Step::Exit
                }
                _ => {
                    prompter.say("Invalid option. Please try again.")?;
                    Step::Continue
                }
            };

            if step == Step::Exit {
                return Ok(());
            }
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    fn display_menu<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        latest_days: u32,
    ) -> Result<()> {
        prompter.say("\n===== Daily Diary Application =====")?;
        prompter.say("1. Add entry for today")?;
        prompter.say("2. Add entry for specific date")?;
        prompter.say("3. View entry by date")?;
        prompter.say("4. List entries by period")?;
        prompter.say(&format!("5. List latest entries ({} days)", latest_days))?;
        prompter.say("6. List all entries")?;
        prompter.say("7. Delete entry by date")?;
        prompter.say("8. Update entry by date")?;
        prompter.say("9. Exit")?;
        Ok(())
    }

    fn add_today<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<Step> {
        let date = format_date_key((self.today)());
        prompter.say(&format!("Adding entry for today ({}):", date))?;

        let mut failed = false;
        for section in Section::ALL {
            let Some(content) = prompter.ask(&format!("{}: ", section.label()))? else {
                return Ok(Step::Exit);
            };
            // Blank answers leave the section as it was
            if content.is_empty() {
                continue;
            }
            if let Err(e) = self.store.set_section(&date, section, &content) {
                prompter.say(&format!("Error saving {} entry: {}", section, e))?;
                failed = true;
            }
        }

        if !failed {
            prompter.say("Entry saved successfully!")?;
        }
        Ok(Step::Continue)
    }

    fn add_specific_date<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Step> {
        let Some(date) = prompter.ask("Enter date (DD-MM-YYYY): ")? else {
            return Ok(Step::Exit);
        };
        let Some(section) = prompter.ask("Enter section (morning/afternoon/evening): ")? else {
            return Ok(Step::Exit);
        };
        let Ok(section) = section.to_lowercase().parse::<Section>() else {
            prompter.say(INVALID_SECTION)?;
            return Ok(Step::Continue);
        };
        let Some(content) = prompter.ask("Enter content: ")? else {
            return Ok(Step::Exit);
        };

        match self.store.set_section(&date, section, &content) {
            Ok(()) => prompter.say("Entry saved successfully!")?,
            Err(e) => prompter.say(&format!("Error: {}", e))?,
        }
        Ok(Step::Continue)
    }

    fn view_entry<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<Step> {
        let Some(date) = prompter.ask("Enter date to view (DD-MM-YYYY): ")? else {
            return Ok(Step::Exit);
        };

        match self.store.get_entry(&date) {
            Some(entry) => prompter.write(&format_entry(entry))?,
            None => prompter.say("No entry found for that date.")?,
        }
        Ok(Step::Continue)
    }

    fn list_by_period<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Step> {
        let Some(start) = prompter.ask("Enter start date (DD-MM-YYYY): ")? else {
            return Ok(Step::Exit);
        };
        let Some(end) = prompter.ask("Enter end date (DD-MM-YYYY): ")? else {
            return Ok(Step::Exit);
        };

        if start.is_empty() || end.is_empty() {
            prompter.say("Please enter both start and end dates.")?;
            return Ok(Step::Continue);
        }

        let order = self.config.range_order;
        match order.compare(&start, &end) {
            None => {
                prompter.say("Dates must be in DD-MM-YYYY format.")?;
                return Ok(Step::Continue);
            }
            Some(Ordering::Greater) => {
                prompter.say("Start date must be before end date.")?;
                return Ok(Step::Continue);
            }
            Some(_) => {}
        }

        let entries = self.store.entries_between(&start, &end, order);
        prompter.write(&format_entry_list(entries, "No entries found in that period."))?;
        Ok(Step::Continue)
    }

    fn list_latest<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<Step> {
        if self.store.is_empty() {
            prompter.say("No entries found.")?;
            return Ok(Step::Continue);
        }

        let days = self.config.latest_days;
        let entries = self.store.latest(days, (self.today)());
        let empty = format!("No entries in the last {} days.", days);
        prompter.write(&format_entry_list(entries, &empty))?;
        Ok(Step::Continue)
    }

    fn list_all<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> Result<Step> {
        prompter.write(&format_entry_list(self.store.entries(), "No entries found."))?;
        Ok(Step::Continue)
    }

    fn delete_entry<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Step> {
        let Some(date) = prompter.ask("Enter date to delete (DD-MM-YYYY): ")? else {
            return Ok(Step::Exit);
        };

        match self.store.delete_entry(&date) {
            Ok(()) => prompter.say(&format!("Entry for {} deleted.", date))?,
            Err(e) => prompter.say(&format!("Error: {}", e))?,
        }
        Ok(Step::Continue)
    }

    fn update_entry<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Step> {
        let Some(date) = prompter.ask("Enter date to update (DD-MM-YYYY): ")? else {
            return Ok(Step::Exit);
        };

        let Some(entry) = self.store.get_entry(&date) else {
            prompter.say("No entry found for that date.")?;
            return Ok(Step::Continue);
        };
        let current = entry.clone();

        prompter.say(&format!("\n==== Current Entry for {} ====", date))?;
        for section in Section::ALL {
            prompter.say(&format!("{}: {}", section.label(), current.section(section)))?;
        }

        let Some(section) =
            prompter.ask("\nEnter section to update (morning/afternoon/evening): ")?
        else {
            return Ok(Step::Exit);
        };
        let Ok(section) = section.to_lowercase().parse::<Section>() else {
            prompter.say(INVALID_SECTION)?;
            return Ok(Step::Continue);
        };

        prompter.say(&format!("Current content: {}", current.section(section)))?;
        let Some(content) = prompter.ask("Enter new content: ")? else {
            return Ok(Step::Exit);
        };

        match self.store.set_section(&date, section, &content) {
            Ok(()) => prompter.say("Entry updated successfully!")?,
            Err(e) => prompter.say(&format!("Error updating entry: {}", e))?,
        }
        Ok(Step::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RangeOrder;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    fn menu(temp: &TempDir, config: Config) -> DiaryMenu {
        let store = EntryStore::load(temp.path().join("alice-diary.json")).unwrap();
        DiaryMenu::new(store, config).with_clock(today)
    }

    fn run_with(menu: &mut DiaryMenu, input: &str) -> String {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        menu.run(&mut prompter).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    fn seed(menu: &mut DiaryMenu, dates: &[&str]) {
        for date in dates {
            menu.store.add_entry(date, "morning", &format!("m-{}", date)).unwrap();
        }
    }

    #[test]
    fn test_add_today_skips_blank_sections() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());

        let out = run_with(&mut menu, "1\ncoffee\n\nbed\n9\n");

        assert!(out.contains("Adding entry for today (17-01-2025):"));
        assert!(out.contains("Entry saved successfully!"));
        assert!(out.contains("Goodbye!"));
        let entry = menu.store().get_entry("17-01-2025").unwrap();
        assert_eq!(entry.morning, "coffee");
        assert_eq!(entry.afternoon, "");
        assert_eq!(entry.evening, "bed");
    }

    static CLOCK_DAY: AtomicU32 = AtomicU32::new(17);

    fn moving_clock() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, CLOCK_DAY.load(AtomicOrdering::SeqCst)).unwrap()
    }

    #[test]
    fn test_today_is_read_per_action() {
        let temp = TempDir::new().unwrap();
        let store = EntryStore::load(temp.path().join("alice-diary.json")).unwrap();
        let mut menu = DiaryMenu::new(store, Config::default()).with_clock(moving_clock);

        run_with(&mut menu, "1
before midnight


");
        CLOCK_DAY.store(18, AtomicOrdering::SeqCst);
        let out = run_with(&mut menu, "1
after midnight


5
9
");

        assert!(out.contains("Adding entry for today (18-01-2025):"));
        assert_eq!(menu.store().get_entry("17-01-2025").unwrap().morning, "before midnight");
        assert_eq!(menu.store().get_entry("18-01-2025").unwrap().morning, "after midnight");
        assert!(out.find("Entry for 18-01-2025") < out.find("Entry for 17-01-2025"));
    }

    #[test]
    fn test_add_specific_date_lowercases_section() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());

        run_with(&mut menu, "2\n01-02-2024\nEVENING\nlate dinner\n9\n");

        assert_eq!(menu.store().get_entry("01-02-2024").unwrap().evening, "late dinner");
    }

    #[test]
    fn test_add_specific_date_invalid_section() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());

        let out = run_with(&mut menu, "2\n01-02-2024\nfunday\n9\n");

        assert!(out.contains(INVALID_SECTION));
        assert!(menu.store().is_empty());
    }

    #[test]
    fn test_view_entry() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());
        seed(&mut menu, &["01-02-2024"]);

        let out = run_with(&mut menu, "3\n01-02-2024\n3\n02-02-2024\n9\n");

        assert!(out.contains("==== Entry for 01-02-2024 ===="));
        assert!(out.contains("Morning: m-01-02-2024"));
        assert!(out.contains("No entry found for that date."));
    }

    #[test]
    fn test_list_by_period_lexicographic_default() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());
        seed(&mut menu, &["01-12-2024", "20-12-2024", "05-01-2025"]);

        let out = run_with(&mut menu, "4\n01-12-2024\n05-01-2025\n9\n");

        assert!(out.contains("Entry for 01-12-2024"));
        assert!(out.contains("Entry for 05-01-2025"));
        // Known quirk of string comparison on day-first dates
        assert!(!out.contains("Entry for 20-12-2024"));
    }

    #[test]
    fn test_list_by_period_chronological() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            range_order: RangeOrder::Chronological,
            ..Config::default()
        };
        let mut menu = menu(&temp, config);
        seed(&mut menu, &["01-12-2024", "20-12-2024", "05-01-2025"]);

        let out = run_with(&mut menu, "4\n01-12-2024\n05-01-2025\n9\n");

        assert!(out.contains("Entry for 20-12-2024"));
    }

    #[test]
    fn test_list_by_period_validation() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());
        seed(&mut menu, &["01-12-2024"]);

        let out = run_with(&mut menu, "4\n\n05-01-2025\n4\n10-01-2025\n05-01-2025\n9\n");

        assert!(out.contains("Please enter both start and end dates."));
        assert!(out.contains("Start date must be before end date."));
    }

    #[test]
    fn test_list_by_period_chronological_rejects_bad_dates() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            range_order: RangeOrder::Chronological,
            ..Config::default()
        };
        let mut menu = menu(&temp, config);

        let out = run_with(&mut menu, "4\nyesterday\n05-01-2025\n9\n");
        assert!(out.contains("Dates must be in DD-MM-YYYY format."));
    }

    #[test]
    fn test_list_latest() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());
        seed(&mut menu, &["16-01-2025", "01-01-2025"]);

        let out = run_with(&mut menu, "5\n9\n");

        assert!(out.contains("5. List latest entries (7 days)"));
        assert!(out.contains("Entry for 16-01-2025"));
        assert!(!out.contains("Entry for 01-01-2025"));
    }

    #[test]
    fn test_list_latest_empty_store() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());

        let out = run_with(&mut menu, "5\n9\n");
        assert!(out.contains("No entries found."));
    }

    #[test]
    fn test_list_all() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());

        let out = run_with(&mut menu, "6\n9\n");
        assert!(out.contains("No entries found."));

        seed(&mut menu, &["01-02-2024", "02-02-2024"]);
        let out = run_with(&mut menu, "6\n9\n");
        assert!(out.contains("Entry for 01-02-2024"));
        assert!(out.contains("Entry for 02-02-2024"));
    }

    #[test]
    fn test_delete_entry() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());
        seed(&mut menu, &["01-02-2024"]);

        let out = run_with(&mut menu, "7\n01-02-2024\n7\n01-02-2024\n9\n");

        assert!(out.contains("Entry for 01-02-2024 deleted."));
        assert!(out.contains("Error: No entry found for date: 01-02-2024"));
        assert!(menu.store().get_entry("01-02-2024").is_none());
    }

    #[test]
    fn test_update_entry() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());
        seed(&mut menu, &["01-02-2024"]);

        let out = run_with(&mut menu, "8\n01-02-2024\nMorning\nrevised\n9\n");

        assert!(out.contains("==== Current Entry for 01-02-2024 ===="));
        assert!(out.contains("Current content: m-01-02-2024"));
        assert!(out.contains("Entry updated successfully!"));
        assert_eq!(menu.store().get_entry("01-02-2024").unwrap().morning, "revised");
    }

    #[test]
    fn test_update_missing_entry() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());

        let out = run_with(&mut menu, "8\n01-02-2024\n9\n");

        assert!(out.contains("No entry found for that date."));
        assert!(menu.store().is_empty());
    }

    #[test]
    fn test_invalid_option_and_eof() {
        let temp = TempDir::new().unwrap();
        let mut menu = menu(&temp, Config::default());

        let out = run_with(&mut menu, "42\n");

        assert!(out.contains("Invalid option. Please try again."));
        assert!(!out.contains("Goodbye!"));
    }
}
