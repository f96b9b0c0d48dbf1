use crate::console::{ConsoleError, Terminal};
use crate::service::tests::utils::{manager, stocked_fixture};
use crate::service::{AuthController, PersonController, PersonService, ReservationController};
use std::collections::VecDeque;
use std::rc::Rc;

/// Terminal fed from a fixed list of input lines. Running out of lines acts
/// like Ctrl-D.
#[derive(Default)]
pub struct ScriptedTerminal {
    input: VecDeque<Option<String>>,
    pub output: Vec<String>,
    pub commands: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new(lines: &[&str]) -> Self {
        ScriptedTerminal {
            input: lines.iter().map(|l| Some(l.to_string())).collect(),
            ..Default::default()
        }
    }

    /// Like `new`, but `None` entries stand for a single Ctrl-D keypress.
    pub fn with_events(events: &[Option<&str>]) -> Self {
        ScriptedTerminal {
            input: events.iter().map(|e| e.map(str::to_string)).collect(),
            ..Default::default()
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        self.output.push(prompt.to_string());
        Ok(self.input.pop_front().flatten())
    }

    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn show_table(&mut self, table: String, _rows: usize) -> Result<(), ConsoleError> {
        self.output.push(table);
        Ok(())
    }

    fn set_commands(&mut self, commands: &[&str]) {
        self.commands = commands.iter().map(|c| c.to_string()).collect();
    }
}

pub struct Services {
    pub auth: Rc<AuthController>,
    pub people: Rc<PersonController>,
    pub bookings: Rc<ReservationController>,
}

/// The stocked service fixture plus the manager admin@hotel.com / A1!b#.
pub fn services() -> Services {
    let f = stocked_fixture();
    f.people.create_manager(manager("admin@hotel.com", "A1!b#")).unwrap();
    Services {
        auth: Rc::new(f.auth),
        people: Rc::new(f.people),
        bookings: Rc::new(f.bookings),
    }
}
