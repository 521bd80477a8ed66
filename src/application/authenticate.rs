//! Login / register use case

use crate::cli::Prompter;
use crate::error::Result;
use crate::infrastructure::CredentialStore;
use std::io::{BufRead, Write};

/// Drives the startup menu until a user is logged in or gives up
pub struct AuthService {
    store: CredentialStore,
}

impl AuthService {
    pub fn new(store: CredentialStore) -> Self {
        AuthService { store }
    }

    /// Returns the logged-in username, or `None` if the user chose Exit or
    /// the input ran out.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Option<String>> {
        loop {
            prompter.say("\n===== Daily Diary Authentication =====")?;
            prompter.say("1. Login")?;
            prompter.say("2. Register")?;
            prompter.say("3. Exit")?;

            let Some(choice) = prompter.ask("Select an option: ")? else {
                return Ok(None);
            };

            match choice.as_str() {
                "1" => {
                    let Some((username, password)) =
                        Self::ask_credentials(prompter, "Please enter your login credentials:")?
                    else {
                        return Ok(None);
                    };

                    if !self.store.authenticate(&username, &password) {
                        prompter.say("Invalid username or password. Please try again.")?;
                        continue;
                    }

                    prompter.say(&format!("User '{}' logged in successfully!", username))?;
                    return Ok(Some(username));
                }
                "2" => {
                    let Some((username, password)) =
                        Self::ask_credentials(prompter, "Please create your account:")?
                    else {
                        return Ok(None);
                    };

                    if let Err(e) = self.store.register(&username, &password) {
                        prompter.say(&format!("Registration failed: {}", e))?;
                        continue;
                    }

                    prompter.say(&format!("User '{}' registered successfully!", username))?;
                    return Ok(Some(username));
                }
                "3" => return Ok(None),
                _ => prompter.say("Invalid option. Please try again.")?,
            }
        }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    fn ask_credentials<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        heading: &str,
    ) -> Result<Option<(String, String)>> {
        prompter.say(heading)?;
        let Some(username) = prompter.ask("Username: ")? else {
            return Ok(None);
        };
        let Some(password) = prompter.ask("Password: ")? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }
}
