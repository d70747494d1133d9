//! Normalizes raw user input into tracking identifiers.

use crate::error::ParseError;

/// Splits `raw` on newlines and commas, trims every piece and drops the
/// empty ones. Order is preserved and duplicates are kept.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] when no identifier survives.
pub fn parse(raw: &str) -> Result<Vec<String>, ParseError> {
    let ids: Vec<String> = raw
        .split(['\n', ','])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();

    if ids.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(ids)
}
