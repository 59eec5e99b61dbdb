// Shell command parsing

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line
    Empty,
    /// Translate a term
    Lookup(String),
    /// Add a pair; a blank source means "use the pre-filled term"
    Add { source: String, target: String },
    Recent,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line of input
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if line.is_empty() {
        return Command::Empty;
    }

    if let Some(rest) = line.strip_prefix('+') {
        let (source, target) = rest.split_once('=').unwrap_or((rest, ""));
        return Command::Add {
            source: source.trim().to_string(),
            target: target.trim().to_string(),
        };
    }

    if let Some(name) = line.strip_prefix(':') {
        return match name.trim() {
            "recent" | "r" => Command::Recent,
            "help" | "h" => Command::Help,
            "quit" | "q" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };
    }

    // `\+term` or `\:term` looks up a term that starts with a command character
    let term = line.strip_prefix('\\').unwrap_or(line);
    Command::Lookup(term.to_string())
}
