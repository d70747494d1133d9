//! Language used for the human-readable parts of a shipment record.

use std::fmt;
use std::str::FromStr;

/// Selects the literal texts (cities, descriptions, badges) a record carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Arabic, as shown to SMSA customers.
    Ar,
}

impl Locale {
    /// Short code used on the command line and in the environment.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ar" | "arabic" => Ok(Self::Ar),
            other => Err(format!("unknown locale `{other}` (expected `en` or `ar`)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" ar ".parse::<Locale>(), Ok(Locale::Ar));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(Locale::Ar.to_string(), "ar");
    }
}
