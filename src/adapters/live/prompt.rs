//! Terminal prompter reading answers line by line.

use std::io::{BufRead, Write};
use std::sync::Mutex;

use crate::error::PortError;
use crate::ports::prompt::Prompter;

/// Prompter over any line reader and writer.
///
/// The binary wires it to stdin/stdout; tests feed it a `Cursor`.
pub struct TerminalPrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl<R, W> TerminalPrompter<R, W> {
    /// Creates a prompter reading from `reader` and echoing questions to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { io: Mutex::new((reader, writer)) }
    }
}

impl<R: BufRead + Send, W: Write + Send> TerminalPrompter<R, W> {
    fn read_answer(&self, question: &str) -> Result<Option<String>, PortError> {
        let mut guard = self.io.lock().map_err(|_| "prompter lock poisoned")?;
        let (reader, writer) = &mut *guard;

        write!(writer, "{question} ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Ok(None);
        }

        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

impl<R: BufRead + Send, W: Write + Send> Prompter for TerminalPrompter<R, W> {
    fn ask(&self, question: &str) -> Result<Option<String>, PortError> {
        self.read_answer(&format!("{question}:"))
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool, PortError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let answer = self.read_answer(&format!("{question} {hint}"))?;

        Ok(match answer.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("y" | "yes") => true,
            Some("n" | "no") => false,
            _ => default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = p.io.into_inner().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn ask_returns_trimmed_lines_in_order() {
        let p = prompter("  Summer Promo \nsecond\n");
        assert_eq!(p.ask("Campaign Name").unwrap().as_deref(), Some("Summer Promo"));
        assert_eq!(p.ask("Next").unwrap().as_deref(), Some("second"));
        assert!(written(p).contains("Campaign Name:"));
    }

    #[test]
    fn ask_maps_blank_and_eof_to_none() {
        let p = prompter("\n");
        assert_eq!(p.ask("Description").unwrap(), None);
        assert_eq!(p.ask("After EOF").unwrap(), None);
    }

    #[test]
    fn confirm_parses_yes_and_no() {
        let p = prompter("y\nNO\nYes\n");
        assert!(p.confirm("Proceed?", false).unwrap());
        assert!(!p.confirm("Proceed?", true).unwrap());
        assert!(p.confirm("Proceed?", false).unwrap());
    }

    #[test]
    fn confirm_falls_back_to_default() {
        let p = prompter("\nmaybe\n");
        assert!(p.confirm("Proceed?", true).unwrap());
        assert!(!p.confirm("Proceed?", false).unwrap());
        assert!(p.confirm("Proceed?", true).unwrap());
        assert!(written(p).contains("[Y/n]"));
    }
}
