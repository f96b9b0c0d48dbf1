use crate::console::{
    AuthPresenter, ConsoleError, PersonnelPresenter, ReservationPresenter, Terminal, print_help,
    read_command,
};
use crate::domain::Email;
use tracing::info;

const START_COMMANDS: [&str; 4] = ["login", "signup", "help", "exit"];
const SESSION_COMMANDS: [&str; 5] = ["profile", "manage", "logout", "help", "exit"];

enum SessionEnd {
    Logout,
    Exit,
}

/// Top level menus tying the presenters together.
pub struct Integration {
    auth: Box<dyn AuthPresenter>,
    personnel: Box<dyn PersonnelPresenter>,
    reservations: Box<dyn ReservationPresenter>,
}

impl Integration {
    pub fn new(
        auth: Box<dyn AuthPresenter>,
        personnel: Box<dyn PersonnelPresenter>,
        reservations: Box<dyn ReservationPresenter>,
    ) -> Self {
        Integration {
            auth,
            personnel,
            reservations,
        }
    }

    pub fn run(&self, term: &mut dyn Terminal) -> Result<(), ConsoleError> {
        term.print("Hotelier online. Type 'help' for commands.");
        loop {
            term.set_commands(&START_COMMANDS);
            let Some(parts) = read_command(term, ">> ")? else {
                break;
            };
            let Some(cmd) = parts.first() else {
                continue;
            };

            match cmd.as_str() {
                "login" => {
                    if let Some(email) = self.auth.authenticate(term)? {
                        info!(%email, "logged in");
                        let end = self.session(term, &email)?;
                        info!(%email, "logged out");
                        if let SessionEnd::Exit = end {
                            break;
                        }
                    }
                }
                "signup" => {
                    self.auth.register(term)?;
                }
                "help" | "?" => print_help(
                    term,
                    &[
                        ("login", "Log in as a manager"),
                        ("signup", "Register a new manager"),
                        ("help / ?", "Show this help menu"),
                        ("exit / quit", "Leave hotelier"),
                    ],
                ),
                "exit" | "quit" => break,
                other => term.print(&format!("Unknown command: {}", other)),
            }
        }
        term.print("Goodbye.");
        Ok(())
    }

    fn session(&self, term: &mut dyn Terminal, email: &Email) -> Result<SessionEnd, ConsoleError> {
        let prompt = format!("{}>> ", email);
        loop {
            term.set_commands(&SESSION_COMMANDS);
            let Some(parts) = read_command(term, &prompt)? else {
                return Ok(SessionEnd::Logout);
            };
            let Some(cmd) = parts.first() else {
                continue;
            };

            match cmd.as_str() {
                "profile" => self.personnel.run(term, email)?,
                "manage" => self.reservations.run(term, email)?,
                "logout" => return Ok(SessionEnd::Logout),
                "help" | "?" => print_help(
                    term,
                    &[
                        ("profile", "View and edit your profile"),
                        ("manage", "Manage hotels, rooms, guests and reservations"),
                        ("logout", "Return to the start menu"),
                        ("help / ?", "Show this help menu"),
                        ("exit / quit", "Leave hotelier"),
                    ],
                ),
                "exit" | "quit" => return Ok(SessionEnd::Exit),
                other => term.print(&format!("Unknown command: {}", other)),
            }
        }
    }
}
