use crate::domain::ports::Console;
use std::io::Write;

/// Writes user-facing output straight to standard output.
#[derive(Debug, Clone)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdoutConsole {
    fn print(&self, text: &str) {
        print!("{}", text);
        // the prompt has no newline, so force it out before we block on input
        let _ = std::io::stdout().flush();
    }

    fn println(&self, text: &str) {
        println!("{}", text);
    }
}
