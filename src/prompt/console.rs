//! Console prompters.

use std::io::{self, BufRead, Write};

/// Line-oriented question/answer channel with the user
pub trait Prompter {
    /// Show `text` and read one line of input without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn ask(&mut self, text: &str) -> io::Result<Option<String>>;

    /// Show a message on its own line
    fn say(&mut self, text: &str) -> io::Result<()>;
}

/// Prompter over any buffered reader and writer
///
/// `Console::stdio()` talks to the terminal; tests feed canned input
/// through `Console::new(Cursor::new(...), Vec::new())`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console reading stdin and writing prompts to stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl Console<io::StdinLock<'static>, io::Stderr> {
    /// Console reading stdin and writing prompts to stderr
    pub fn stdio_stderr() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

/// Prompter that answers every question with an empty line
///
/// Used for non-interactive runs: every field falls back to its default.
pub struct AcceptDefaults<W> {
    output: W,
}

impl<W: Write> AcceptDefaults<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> Prompter for AcceptDefaults<W> {
    fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", text)?;
        Ok(Some(String::new()))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_console_reads_lines_in_order() {
        let mut console = Console::new(Cursor::new("first\r\n\nthird"), Vec::new());

        assert_eq!(console.ask("1? ").unwrap(), Some("first".to_string()));
        assert_eq!(console.ask("2? ").unwrap(), Some(String::new()));
        assert_eq!(console.ask("3? ").unwrap(), Some("third".to_string()));
        assert_eq!(console.ask("4? ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "1? 2? 3? 4? ");
    }

    #[test]
    fn test_console_keeps_inner_whitespace() {
        let mut console = Console::new(Cursor::new("  padded \n"), Vec::new());
        assert_eq!(console.ask("").unwrap(), Some("  padded ".to_string()));
    }

    #[test]
    fn test_say_writes_a_line() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.say("hello").unwrap();
        assert_eq!(console.into_output(), b"hello\n");
    }

    #[test]
    fn test_accept_defaults_never_runs_dry() {
        let mut prompter = AcceptDefaults::new(Vec::new());
        for _ in 0..3 {
            assert_eq!(prompter.ask("?").unwrap(), Some(String::new()));
        }
    }
}
