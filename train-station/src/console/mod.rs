//! Interactive console for the station.
//!
//! A line-oriented menu loop over any reader and writer, so the same code
//! drives a terminal session and in-memory tests.

mod render;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::station::Station;

pub use render::{CLEAR_SCREEN, write_status, write_step};

/// Errors that end a console session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateDirection,
    Exit,
}

impl Command {
    /// Parse a menu selection. Surrounding whitespace is ignored.
    ///
    /// Returns `None` for anything that is not a known command.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Command::CreateDirection),
            "2" => Some(Command::Exit),
            _ => None,
        }
    }

    /// The text the operator types to select this command.
    pub fn key(&self) -> &'static str {
        match self {
            Command::CreateDirection => "1",
            Command::Exit => "2",
        }
    }
}

/// Menu-driven station session.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console that never clears the screen.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal after every pause.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Run the menu loop until the operator exits or input ends.
    ///
    /// Station errors are reported to the operator and the loop carries on.
    pub fn run(&mut self, station: &mut Station) -> Result<(), ConsoleError> {
        loop {
            write_status(&mut self.output, station)?;
            self.write_menu()?;

            let Some(line) = self.prompt("Enter command: ")? else {
                break;
            };

            match Command::parse(&line) {
                Some(Command::CreateDirection) => self.perform_train_operations(station)?,
                Some(Command::Exit) => break,
                None => {
                    debug!(input = %line.trim(), "Unknown command");
                    writeln!(self.output, "Unknown command!")?;
                }
            }

            self.pause()?;
        }

        Ok(())
    }

    /// Ask for a direction and take its train through the whole workflow.
    fn perform_train_operations(&mut self, station: &mut Station) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        let Some(departure) = self.prompt("Enter departure station: ")? else {
            return Ok(());
        };
        let Some(arrival) = self.prompt("Enter arrival station: ")? else {
            return Ok(());
        };

        let mut step_result = Ok(());
        let result = station
            .perform_train_operations(&departure, &arrival, |s| {
                if step_result.is_ok() {
                    step_result = self.show_step(s);
                }
            })
            .map(|_| ());

        match result {
            Ok(()) => {
                step_result?;
                write_step(&mut self.output, station)?;
            }
            Err(e) => {
                step_result?;
                writeln!(self.output, "{e}")?;
            }
        }

        Ok(())
    }

    /// Report a completed step, pause, then redraw the status screen.
    fn show_step(&mut self, station: &Station) -> Result<(), ConsoleError> {
        write_step(&mut self.output, station)?;
        self.pause()?;
        write_status(&mut self.output, station)?;
        Ok(())
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(
            self.output,
            "{} - create direction",
            Command::CreateDirection.key()
        )?;
        writeln!(self.output, "{} - exit", Command::Exit.key())
    }

    /// Wait for the operator to press Enter, then clear the screen if enabled.
    fn pause(&mut self) -> Result<(), ConsoleError> {
        self.prompt("Press Enter to continue: ")?;
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        } else {
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Print a prompt and read one line without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Consume the console, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }
}
