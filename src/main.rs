use anyhow::Context;
use clap::Parser;
use diary::application::{AuthService, DiaryMenu};
use diary::cli::{Cli, Prompter};
use diary::error::DiaryError;
use diary::infrastructure::{Config, CredentialStore, DiaryPaths, EntryStore};
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Every outcome, including failures, ends with exit code 0.
    if let Err(e) = run(cli) {
        match e.downcast_ref::<DiaryError>() {
            // Context (if any) on one line, then the error with its suggestions
            Some(diary_err) if e.to_string() != diary_err.to_string() => {
                eprintln!("{}", e);
                eprintln!("Error: {}", diary_err.display_with_suggestions());
            }
            Some(diary_err) => eprintln!("Error: {}", diary_err.display_with_suggestions()),
            None => eprintln!("Error: {:#}", e),
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = DiaryPaths::resolve(cli.data_dir)?;
    let config = Config::load_from_dir(paths.root())?;
    log::debug!("Using data directory {}", paths.root().display());

    let users =
        CredentialStore::load(paths.users_file()).context("Error initializing user store")?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let Some(username) = AuthService::new(users).run(&mut prompter)? else {
        prompter.say("Exiting.")?;
        return Ok(());
    };

    let diary_file = paths.diary_file(&username);
    let store = EntryStore::load(&diary_file).context("Error initializing diary")?;

    prompter.say(&format!("Welcome to your Daily Diary, {}!", username))?;
    prompter.say(&format!("Diary data stored at: {}", diary_file.display()))?;

    DiaryMenu::new(store, config).run(&mut prompter)?;
    Ok(())
}
