use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use crate::interpreter::environment::Environment;

const PROMPT: &str = ">> ";

/// Runs the interactive prompt until end of input.
///
/// A single top-level environment is threaded across lines, so bindings and
/// function definitions accumulate: defining `let add = fn(x, y) { x + y };`
/// on one line and calling `add(1, 2)` on the next works. Each line's value
/// is printed in its display form; parse and runtime errors are printed and
/// the session continues.
///
/// # Errors
/// Only I/O failures on stdin/stdout end the session abnormally.
pub fn start() -> io::Result<()> {
    let env = Rc::new(RefCell::new(Environment::new()));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let user = std::env::var("USER").unwrap_or_else(|_| "there".to_string());
    writeln!(stdout, "Hello {user}! This is the MK programming language!")?;
    writeln!(stdout, "Feel free to type in commands")?;

    let mut line = String::new();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            // ctrl-D
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match crate::interpret_with(&line, &env) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(error) => writeln!(stdout, "{error}")?,
        }
    }
}
