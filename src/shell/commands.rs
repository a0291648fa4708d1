/// Commands understood in command mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    Help,
    Java,
    Clear,
    History,
    Echo(&'a str),
    Whoami,
    Quit,
    Unknown(&'a str),
}

/// Parse a command line; `None` for blank input
pub fn parse_command(input: &str) -> Option<ShellCommand<'_>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (cmd, arg) = match trimmed.find(char::is_whitespace) {
        Some(i) => (&trimmed[..i], trimmed[i..].trim()),
        None => (trimmed, ""),
    };
    let command = match cmd {
        "help" | "?" => ShellCommand::Help,
        "java" | "jshell" => ShellCommand::Java,
        "clear" | "cls" => ShellCommand::Clear,
        "history" => ShellCommand::History,
        "echo" => ShellCommand::Echo(arg),
        "whoami" => ShellCommand::Whoami,
        "exit" | "quit" | "logout" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(cmd),
    };
    Some(command)
}
