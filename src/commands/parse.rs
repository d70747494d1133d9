//! `parcel-track parse` command.

use crate::cli::InputArgs;
use crate::parser;

/// Execute the `parse` command.
///
/// # Errors
///
/// Returns an error string if input cannot be read or holds no numbers.
pub fn run(args: &InputArgs) -> Result<(), String> {
    let raw = super::read_input(args)?;
    let ids = parser::parse(&raw).map_err(|e| e.to_string())?;
    for id in &ids {
        println!("{id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_accepts_numbers() {
        let args = InputArgs { ids: vec!["A, B".into()], input: None };
        assert!(run(&args).is_ok());
    }

    #[test]
    fn parse_command_rejects_separators_only() {
        let args = InputArgs { ids: vec![",,".into()], input: None };
        let err = run(&args).unwrap_err();
        assert!(err.contains("no tracking numbers"));
    }
}
