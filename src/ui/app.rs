//! Main TUI application state and logic

use crate::shell::{Mode, Shell};
use crate::ui::panes::{
    render_environment_pane, render_status_bar, render_terminal_pane, EnvironmentScrollState,
    StatusRenderData, TerminalRenderData, TerminalScrollState,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Lines moved by PageUp / PageDown
const PAGE_SIZE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Terminal,
    Environment,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Terminal => FocusedPane::Environment,
            FocusedPane::Environment => FocusedPane::Terminal,
        }
    }
}

/// The main application state
pub struct App {
    /// Command shell and Java session
    pub shell: Shell,

    /// Text typed since the last Enter
    pub input: String,

    /// Position while browsing history with ↑/↓ (None = editing a new line)
    pub history_cursor: Option<usize>,

    pub focused_pane: FocusedPane,

    pub terminal_scroll: TerminalScrollState,
    pub environment_scroll: EnvironmentScrollState,

    pub status_message: String,
}

impl App {
    pub fn new(shell: Shell) -> Self {
        App {
            shell,
            input: String::new(),
            history_cursor: None,
            focused_pane: FocusedPane::Terminal,
            terminal_scroll: TerminalScrollState {
                offset_from_bottom: 0,
            },
            environment_scroll: EnvironmentScrollState { offset: 0 },
            status_message: String::from("Ready! Type `help` to get started."),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.shell.should_quit() {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        render_terminal_pane(
            frame,
            columns[0],
            TerminalRenderData {
                transcript: self.shell.transcript(),
                prompt: self.shell.prompt(),
                input: &self.input,
            },
            self.focused_pane == FocusedPane::Terminal,
            &mut self.terminal_scroll,
        );

        render_environment_pane(
            frame,
            columns[1],
            self.shell.session(),
            self.focused_pane == FocusedPane::Environment,
            &mut self.environment_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                mode: self.shell.mode(),
                line_count: self.shell.transcript().len(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => self.quit(),
                KeyCode::Char('u') => self.input.clear(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.history_cursor = None;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Terminal => self.recall_previous(),
                FocusedPane::Environment => {
                    self.environment_scroll.offset =
                        self.environment_scroll.offset.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Terminal => self.recall_next(),
                FocusedPane::Environment => {
                    self.environment_scroll.offset =
                        self.environment_scroll.offset.saturating_add(1);
                }
            },
            KeyCode::PageUp => {
                self.terminal_scroll.offset_from_bottom = self
                    .terminal_scroll
                    .offset_from_bottom
                    .saturating_add(PAGE_SIZE);
            }
            KeyCode::PageDown => {
                self.terminal_scroll.offset_from_bottom = self
                    .terminal_scroll
                    .offset_from_bottom
                    .saturating_sub(PAGE_SIZE);
            }
            _ => {}
        }
    }

    fn quit(&mut self) {
        self.shell.quit();
    }

    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.history_cursor = None;
        self.shell.submit(&line);
        self.terminal_scroll.offset_from_bottom = 0;
        self.status_message = match self.shell.mode() {
            Mode::Command => "Shell".to_string(),
            Mode::Java => match self.shell.session() {
                Some(env) => format!(
                    "Java session: {} variable(s), {} class(es)",
                    env.var_count(),
                    env.class_count()
                ),
                None => "Java session".to_string(),
            },
        };
    }

    fn recall_previous(&mut self) {
        let history = self.shell.history();
        if history.is_empty() {
            return;
        }
        let index = match self.history_cursor {
            Some(i) => i.saturating_sub(1),
            None => history.len() - 1,
        };
        self.history_cursor = Some(index);
        self.input = history[index].clone();
    }

    fn recall_next(&mut self) {
        let Some(i) = self.history_cursor else {
            return;
        };
        let history = self.shell.history();
        if i + 1 < history.len() {
            self.history_cursor = Some(i + 1);
            self.input = history[i + 1].clone();
        } else {
            self.history_cursor = None;
            self.input.clear();
        }
    }
}
