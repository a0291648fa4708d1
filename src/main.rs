// javaterm: portfolio terminal with a simulated Java REPL

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use javaterm::shell::Shell;
use javaterm::ui::App;

const WELCOME: &str = "Welcome to the portfolio terminal. Type `help` for commands.";

/// Portfolio terminal with a pattern-matching Java REPL
#[derive(Debug, Parser)]
#[command(name = "javaterm", version, about)]
struct Args {
    /// Read lines from stdin and print plain output instead of the TUI
    #[arg(long)]
    plain: bool,

    /// Start inside a Java session
    #[arg(long)]
    java: bool,

    /// Seed for object handle ids (reproducible output)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI never logs to the screen)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if args.plain => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        // Logging to the alternate screen would corrupt it
        None => {}
    }
    Ok(())
}

/// Line-based front-end: prompt, read, print whatever the shell appended
fn run_plain(shell: &mut Shell) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut printed = 0;

    for line in shell.transcript().get_output() {
        writeln!(stdout, "{}", line)?;
        printed += 1;
    }

    let mut lines = stdin.lock().lines();
    while !shell.should_quit() {
        write!(stdout, "{}", shell.prompt())?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            break;
        };
        let line = line?;
        shell.submit(&line);

        let transcript = shell.transcript();
        if transcript.len() < printed {
            // `clear` shrank the transcript
            printed = 0;
        }
        // Skip the echoed input line; the user already sees it
        for entry in transcript.lines.iter().skip(printed + 1) {
            writeln!(stdout, "{}", entry.text)?;
        }
        printed = transcript.len();
    }

    Ok(())
}

fn run_tui(shell: Shell) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(shell);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut shell = Shell::new(args.seed);
    shell.notice(WELCOME);
    if args.java {
        shell.start_java();
    }

    tracing::info!(plain = args.plain, java = args.java, "starting");

    if args.plain {
        run_plain(&mut shell)?;
        Ok(())
    } else {
        run_tui(shell)
    }
}
