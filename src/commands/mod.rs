//! Command dispatch and handlers.

pub mod parse;
pub mod track;

use std::io::Read;
use std::path::Path;

use crate::cli::{Command, InputArgs};

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Track(args) => track::run(args),
        Command::Parse(args) => parse::run(args),
    }
}

/// Collects the raw tracking-number text for a command.
///
/// Positional numbers come first, one per line, followed by the contents of
/// `--input`. With neither, stdin is read.
///
/// # Errors
///
/// Returns an error string if the input file or stdin cannot be read.
pub fn read_input(args: &InputArgs) -> Result<String, String> {
    let mut raw = args.ids.join("\n");

    let extra = match args.input.as_deref() {
        Some(path) if path == Path::new("-") => Some(read_stdin()?),
        Some(path) => Some(
            std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?,
        ),
        None if args.ids.is_empty() => Some(read_stdin()?),
        None => None,
    };

    if let Some(extra) = extra {
        if !raw.is_empty() {
            raw.push('\n');
        }
        raw.push_str(&extra);
    }
    Ok(raw)
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("Failed to read stdin: {e}"))?;
    Ok(buf)
}
