//! Verbosity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much detail the field renderer puts into each rendered value.
///
/// Verbosity never decides whether a field is emitted, only how its value is
/// formatted. Larger codes mean more detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Verbosity {
    Summary = 0,
    #[default]
    Standard = 1,
    Detailed = 2,
    Full = 3,
}

impl Verbosity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Verbosity::Summary => "SUMMARY",
            Verbosity::Standard => "STANDARD",
            Verbosity::Detailed => "DETAILED",
            Verbosity::Full => "FULL",
        }
    }

    /// Numeric code as carried by call-site annotations
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Map a raw annotation code to a level.
    ///
    /// The code is an open integer at the call site; values past the defined
    /// range clamp to the nearest level rather than failing.
    pub fn from_code(code: i32) -> Self {
        match code {
            i32::MIN..=0 => Verbosity::Summary,
            1 => Verbosity::Standard,
            2 => Verbosity::Detailed,
            _ => Verbosity::Full,
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Verbosity::Summary => BrightBlack,
            Verbosity::Standard => White,
            Verbosity::Detailed => Cyan,
            Verbosity::Full => Blue,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUMMARY" => Ok(Verbosity::Summary),
            "STANDARD" => Ok(Verbosity::Standard),
            "DETAILED" => Ok(Verbosity::Detailed),
            "FULL" => Ok(Verbosity::Full),
            _ => Err(format!("Invalid verbosity level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_clamps() {
        assert_eq!(Verbosity::from_code(-5), Verbosity::Summary);
        assert_eq!(Verbosity::from_code(0), Verbosity::Summary);
        assert_eq!(Verbosity::from_code(1), Verbosity::Standard);
        assert_eq!(Verbosity::from_code(2), Verbosity::Detailed);
        assert_eq!(Verbosity::from_code(3), Verbosity::Full);
        assert_eq!(Verbosity::from_code(99), Verbosity::Full);
    }

    #[test]
    fn test_parse_roundtrip() {
        assert_eq!("detailed".parse::<Verbosity>(), Ok(Verbosity::Detailed));
        assert!("chatty".parse::<Verbosity>().is_err());
        assert_eq!(Verbosity::Full.to_string(), "FULL");
    }
}
