use crate::console::{ConsoleError, FormResult, Terminal, prompt, report};
use crate::domain::{Email, Extension, Name, Password};
use crate::person::Manager;
use crate::service::{AuthService, PersonService};
use colored::Colorize;
use std::rc::Rc;

pub trait AuthPresenter {
    /// Asks for credentials; the email of the authenticated manager on
    /// success.
    fn authenticate(&self, term: &mut dyn Terminal) -> Result<Option<Email>, ConsoleError>;

    /// Signs up a new manager. True when the account was created.
    fn register(&self, term: &mut dyn Terminal) -> Result<bool, ConsoleError>;
}

pub struct AuthConsole {
    auth: Rc<dyn AuthService>,
    people: Rc<dyn PersonService>,
}

impl AuthConsole {
    pub fn new(auth: Rc<dyn AuthService>, people: Rc<dyn PersonService>) -> Self {
        AuthConsole { auth, people }
    }

    fn credentials(&self, term: &mut dyn Terminal) -> FormResult<(Email, Password)> {
        let email = prompt(term, "email")?;
        let password = prompt(term, "password")?;
        Ok((email, password))
    }

    fn signup_form(&self, term: &mut dyn Terminal) -> FormResult<String> {
        let name: Name = prompt(term, "name")?;
        let email: Email = prompt(term, "email")?;
        let extension: Extension = prompt(term, "extension")?;
        let password: Password = prompt(term, "password")?;

        let manager = Manager::new(name, email.clone(), extension, password);
        self.people.create_manager(manager)?;
        Ok(format!("manager {} registered", email))
    }
}

impl AuthPresenter for AuthConsole {
    fn authenticate(&self, term: &mut dyn Terminal) -> Result<Option<Email>, ConsoleError> {
        let (email, password) = match self.credentials(term) {
            Ok(credentials) => credentials,
            Err(err) => {
                report(term, Err(err))?;
                return Ok(None);
            }
        };

        if self.auth.authenticate(&email, &password) {
            term.print(&format!("welcome, {}", email).green().to_string());
            Ok(Some(email))
        } else {
            term.print(&"authentication failed: wrong email or password".red().to_string());
            Ok(None)
        }
    }

    fn register(&self, term: &mut dyn Terminal) -> Result<bool, ConsoleError> {
        let outcome = self.signup_form(term);
        let created = outcome.is_ok();
        report(term, outcome)?;
        Ok(created)
    }
}
