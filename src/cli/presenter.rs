//! CLI presenter for output formatting

use std::io::{self, ErrorKind, Write};

use colored::*;

/// Presenter for CLI output formatting
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output a line to stdout
    pub fn output(&self, text: &str) {
        self.write_stdout(&format!("{}\n", text));
    }

    /// Output pre-formatted text to stdout as-is
    pub fn output_inline(&self, text: &str) {
        self.write_stdout(text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        self.write_stdout(&format!("{}: {}\n", key.cyan(), value));
    }

    fn write_stdout(&self, text: &str) {
        if let Err(e) = write_ignoring_broken_pipe(&mut io::stdout().lock(), text) {
            self.error(&format!("Failed to write output: {}", e));
        }
    }
}

/// Write and flush `text`. A reader that went away (`| head`) is not an error.
fn write_ignoring_broken_pipe<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_and_flushes() {
        let mut out = Vec::new();
        write_ignoring_broken_pipe(&mut out, "- A\n").unwrap();
        assert_eq!(out, b"- A\n");
    }

    #[test]
    fn broken_pipe_is_ignored() {
        assert!(write_ignoring_broken_pipe(&mut ClosedPipe, "text").is_ok());
    }

    #[test]
    fn other_errors_are_reported() {
        assert!(write_ignoring_broken_pipe(&mut FullDisk, "text").is_err());
    }
}
