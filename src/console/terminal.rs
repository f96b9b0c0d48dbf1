use crate::console::ConsoleError;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::process::{Command, Stdio};

/// Listings longer than this go through a pager.
const PAGE_ROWS: usize = 20;

/// Line oriented user interaction.
pub trait Terminal {
    /// Reads one line. `None` means the user closed the input (Ctrl-D) or
    /// interrupted it (Ctrl-C).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError>;

    fn print(&mut self, text: &str);

    /// Prints a rendered table of `rows` entries.
    fn show_table(&mut self, table: String, rows: usize) -> Result<(), ConsoleError>;

    /// Words offered by tab completion in the current menu.
    fn set_commands(&mut self, commands: &[&str]);
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

pub struct RustylineTerminal {
    editor: Editor<CompleteHelper, DefaultHistory>,
}

impl RustylineTerminal {
    pub fn new() -> Result<Self, ConsoleError> {
        let config = rustyline::Config::builder()
            .history_ignore_space(true)
            .completion_type(rustyline::CompletionType::List)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(CompleteHelper { commands: Vec::new() }));
        Ok(RustylineTerminal { editor })
    }
}

impl Terminal for RustylineTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed)?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn show_table(&mut self, table: String, rows: usize) -> Result<(), ConsoleError> {
        if rows > PAGE_ROWS {
            paginate(table)
        } else {
            println!("{}", table);
            Ok(())
        }
    }

    fn set_commands(&mut self, commands: &[&str]) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.commands = commands.iter().map(|c| c.to_string()).collect();
        }
    }
}

fn paginate(content: String) -> Result<(), ConsoleError> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e.into());
            }
        }
    }

    pager.wait()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::MemHistory;

    fn complete(helper: &CompleteHelper, line: &str) -> Vec<String> {
        let history = MemHistory::new();
        let ctx = Context::new(&history);
        let (_, pairs) = helper.complete(line, line.len(), &ctx).unwrap();
        pairs.into_iter().map(|p| p.display).collect()
    }

    #[test]
    fn test_completion_by_prefix() {
        let helper = CompleteHelper {
            commands: vec!["hotel".to_string(), "help".to_string(), "room".to_string()],
        };
        assert_eq!(vec!["hotel", "help"], complete(&helper, "h"));
        assert_eq!(vec!["room"], complete(&helper, "ro"));
        assert!(complete(&helper, "x").is_empty());
    }
}
