use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Transient success status, green on a terminal.
pub fn success(message: &str) {
    if io::stdout().is_terminal() {
        println!("{}", message.green());
    } else {
        println!("{}", message);
    }
}

/// Non-fatal warning on stderr, yellow on a terminal.
pub fn warning(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{} {}", "Warning:".yellow(), message);
    } else {
        eprintln!("Warning: {}", message);
    }
}

/// Ask for an explicit yes. Anything but y/yes declines.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}
