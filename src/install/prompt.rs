use std::io::{self, BufRead, IsTerminal, Write};

/// Yes/no question asked before an existing hook is replaced.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool>;
}

/// Asks on the terminal.
///
/// With a TTY on both stdin and stderr this renders a `dialoguer` prompt.
/// Otherwise it prints the question to stderr and reads a single line from
/// stdin, which keeps piped answers (`echo y | commitlint install`) working.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(default)
                .interact()
                .map_err(io::Error::other);
        }

        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let mut err = io::stderr();
        write!(err, "{} {} ", prompt, hint)?;
        err.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            writeln!(err)?;
            return Ok(default);
        }
        Ok(parse_answer(&line).unwrap_or(default))
    }
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
