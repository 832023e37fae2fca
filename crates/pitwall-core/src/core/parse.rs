//! Input line parsing.
//!
//! The token before the first space selects the command; everything after
//! that space is one raw argument, spaces included.

/// A recognized operation, or a line for the OS shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Clear,
    List(Option<String>),
    Navigate(Option<String>),
    Telemetry,
    Champions,
    Map(Option<String>),
    Next,
    News,
    SpeedTest,
    Quote,
    Help,
    /// Unrecognized token: the full original line.
    Forward(String),
}

/// Splits a line into its lower-cased token and optional raw argument.
pub fn split_line(line: &str) -> (String, Option<&str>) {
    match line.split_once(' ') {
        Some((token, rest)) => (token.to_lowercase(), Some(rest)),
        None => (line.to_lowercase(), None),
    }
}

/// Strips one pair of matching surrounding quotes.
pub fn strip_quotes(arg: &str) -> &str {
    for quote in ['"', '\''] {
        if arg.len() >= 2 && arg.starts_with(quote) && arg.ends_with(quote) {
            return &arg[1..arg.len() - 1];
        }
    }
    arg
}

/// Parses one input line. Returns `None` for blank lines.
pub fn parse(line: &str) -> Option<Command> {
    if line.trim().is_empty() {
        return None;
    }

    let (token, raw_arg) = split_line(line);
    let arg = || {
        raw_arg
            .map(strip_quotes)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
    };

    let command = match token.as_str() {
        "flag" | "exit" | "quit" | "q" => Command::Quit,
        "clear" => Command::Clear,
        "grid" | "ls" | "dir" => Command::List(arg()),
        "box" | "cd" => Command::Navigate(arg()),
        "telemetry" => Command::Telemetry,
        "champions" => Command::Champions,
        "map" => Command::Map(arg()),
        "next" => Command::Next,
        "news" => Command::News,
        "drs" => Command::SpeedTest,
        "quote" => Command::Quote,
        "radio" | "help" => Command::Help,
        _ => Command::Forward(line.to_string()),
    };
    Some(command)
}
