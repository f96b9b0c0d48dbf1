use crate::console::{
    ConsoleError, FormError, FormResult, Terminal, argument, print_help, prompt_or_keep,
    read_command, report, show_rows,
};
use crate::domain::Email;
use crate::person::Manager;
use crate::service::PersonService;
use std::rc::Rc;

const COMMANDS: [&str; 8] = [
    "show",
    "name",
    "password",
    "extension",
    "managers",
    "dismiss",
    "help",
    "back",
];

/// Profile of the logged-in manager.
pub trait PersonnelPresenter {
    fn run(&self, term: &mut dyn Terminal, email: &Email) -> Result<(), ConsoleError>;
}

pub struct PersonnelConsole {
    people: Rc<dyn PersonService>,
}

impl PersonnelConsole {
    pub fn new(people: Rc<dyn PersonService>) -> Self {
        PersonnelConsole { people }
    }

    fn show(&self, term: &mut dyn Terminal, email: &Email) -> FormResult<()> {
        let manager = self.people.read_manager(email)?;
        show_rows(term, &[manager], "")?;
        Ok(())
    }

    /// Removes another manager's account.
    fn dismiss(&self, email: &Email, arg: Option<&String>) -> FormResult<String> {
        let other: Email = argument(arg, "dismiss <email>")?;
        if other == *email {
            return Err(FormError::Refused("you cannot dismiss yourself"));
        }
        self.people.delete_manager(&other)?;
        Ok(format!("manager {} dismissed", other))
    }

    /// Reads the stored profile, lets `change` edit it and stores it back.
    fn edit<F>(&self, term: &mut dyn Terminal, email: &Email, change: F) -> FormResult<String>
    where
        F: FnOnce(&mut dyn Terminal, &mut Manager) -> FormResult<()>,
    {
        let mut manager = self.people.read_manager(email)?;
        change(term, &mut manager)?;
        self.people.update_manager(manager)?;
        Ok("profile updated".to_string())
    }
}

impl PersonnelPresenter for PersonnelConsole {
    fn run(&self, term: &mut dyn Terminal, email: &Email) -> Result<(), ConsoleError> {
        loop {
            term.set_commands(&COMMANDS);
            let Some(parts) = read_command(term, "profile> ")? else {
                break;
            };
            let Some(cmd) = parts.first() else {
                continue;
            };

            match cmd.as_str() {
                "show" => {
                    if let Err(err) = self.show(term, email) {
                        report(term, Err(err))?;
                    }
                }
                "name" => {
                    let outcome = self.edit(term, email, |term, m| {
                        m.info.name = prompt_or_keep(term, "name", &m.info.name)?;
                        Ok(())
                    });
                    report(term, outcome)?;
                }
                "password" => {
                    let outcome = self.edit(term, email, |term, m| {
                        m.password = prompt_or_keep(term, "password", &m.password)?;
                        Ok(())
                    });
                    report(term, outcome)?;
                }
                "extension" => {
                    let outcome = self.edit(term, email, |term, m| {
                        m.extension = prompt_or_keep(term, "extension", &m.extension)?;
                        Ok(())
                    });
                    report(term, outcome)?;
                }
                "managers" => {
                    let managers = self.people.list_managers();
                    show_rows(term, &managers, "No managers registered.")?;
                }
                "dismiss" => {
                    let outcome = self.dismiss(email, parts.get(1));
                    report(term, outcome)?;
                }
                "help" | "?" => print_help(
                    term,
                    &[
                        ("show", "Show your profile"),
                        ("name", "Change your name"),
                        ("password", "Change your password"),
                        ("extension", "Change your phone extension"),
                        ("managers", "List every manager"),
                        ("dismiss <email>", "Remove another manager's account"),
                        ("help / ?", "Show this help menu"),
                        ("back", "Return to the main menu"),
                    ],
                ),
                "back" => break,
                other => term.print(&format!("Unknown command: {}", other)),
            }
        }
        Ok(())
    }
}
