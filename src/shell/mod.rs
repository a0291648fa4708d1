//! Command shell hosting the Java REPL
//!
//! The shell starts in command mode. `java` switches to a Java session where
//! every line goes to [`submit_line`]; `exit()` or `System.exit(...)` returns
//! to command mode and discards the session state. All output lands in a
//! [`Transcript`] that the front-ends render.

mod commands;

pub use commands::{parse_command, ShellCommand};

use crate::interpreter::engine::{submit_line, Outcome};
use crate::memory::environment::Environment;
use crate::transcript::{LineStyle, Transcript};
use tracing::{debug, info};

pub const COMMAND_PROMPT: &str = "guest@portfolio:~$ ";
pub const JAVA_PROMPT: &str = "java> ";

const JAVA_BANNER: &str = "Java REPL (simulated). Type exit() to return to the shell.";
const JAVA_GOODBYE: &str = "Exiting Java REPL";

const HELP_TEXT: &str = "\
Available commands:
  help       show this message
  java       start a Java REPL session
  clear      clear the terminal
  history    list previously entered lines
  echo TEXT  print TEXT
  whoami     print the current user
  exit       leave the terminal";

/// Which interpreter receives the next line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Command,
    Java,
}

/// Shell state: mode, Java environment, transcript and input history
pub struct Shell {
    mode: Mode,
    environment: Environment,
    transcript: Transcript,
    history: Vec<String>,
    should_quit: bool,
}

impl Shell {
    /// `seed` makes object handle ids reproducible
    pub fn new(seed: Option<u64>) -> Self {
        let environment = match seed {
            Some(seed) => Environment::with_seed(seed),
            None => Environment::new(),
        };
        Shell {
            mode: Mode::Command,
            environment,
            transcript: Transcript::new(),
            history: Vec::new(),
            should_quit: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prompt(&self) -> &'static str {
        match self.mode {
            Mode::Command => COMMAND_PROMPT,
            Mode::Java => JAVA_PROMPT,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The Java environment, only while a session is active
    pub fn session(&self) -> Option<&Environment> {
        match self.mode {
            Mode::Java => Some(&self.environment),
            Mode::Command => None,
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Print a notice without going through a command
    pub fn notice(&mut self, text: &str) {
        self.transcript.push(text, LineStyle::Info);
    }

    /// Handle one line of user input in the current mode
    pub fn submit(&mut self, input: &str) {
        let echo = format!("{}{}", self.prompt(), input);
        self.transcript.push(&echo, LineStyle::Input);

        if !input.trim().is_empty() {
            self.history.push(input.trim().to_string());
        }

        match self.mode {
            Mode::Command => self.run_command(input),
            Mode::Java => self.run_java(input),
        }
    }

    /// Enter Java mode with a fresh environment
    pub fn start_java(&mut self) {
        self.environment.reset();
        self.mode = Mode::Java;
        info!("java session started");
        self.transcript.push(JAVA_BANNER, LineStyle::Info);
    }

    /// Leave the program, ending any Java session first
    pub fn quit(&mut self) {
        if self.mode == Mode::Java {
            self.end_java();
        }
        self.should_quit = true;
    }

    fn end_java(&mut self) {
        self.environment.reset();
        self.mode = Mode::Command;
        info!("java session ended");
    }

    fn run_java(&mut self, input: &str) {
        match submit_line(&mut self.environment, input) {
            Outcome::Empty => {}
            Outcome::Exit => {
                self.transcript.push(JAVA_GOODBYE, LineStyle::Info);
                self.end_java();
            }
            Outcome::Output { text, terminate } => {
                if !text.is_empty() {
                    self.transcript.push(&text, LineStyle::Output);
                }
                if terminate {
                    self.end_java();
                }
            }
            Outcome::Error(err) => {
                debug!(kind = ?err.kind(), %err, "line rejected");
                self.transcript.push(&err.to_string(), LineStyle::Error);
            }
        }
    }

    fn run_command(&mut self, input: &str) {
        let Some(command) = parse_command(input) else {
            return;
        };

        match command {
            ShellCommand::Help => self.transcript.push(HELP_TEXT, LineStyle::Info),
            ShellCommand::Java => self.start_java(),
            ShellCommand::Clear => self.transcript.clear(),
            ShellCommand::History => {
                let listing: Vec<String> = self
                    .history
                    .iter()
                    .enumerate()
                    .map(|(i, line)| format!("{:>4}  {}", i + 1, line))
                    .collect();
                self.transcript.push(&listing.join("\n"), LineStyle::Output);
            }
            ShellCommand::Echo(text) => self.transcript.push(text, LineStyle::Output),
            ShellCommand::Whoami => self.transcript.push("guest", LineStyle::Output),
            ShellCommand::Quit => self.should_quit = true,
            ShellCommand::Unknown(name) => {
                let message = format!("command not found: {}", name);
                self.transcript.push(&message, LineStyle::Error);
            }
        }
    }
}
