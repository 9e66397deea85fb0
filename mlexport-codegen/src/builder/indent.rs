//! Indentation configuration for code generation.

use std::{fmt, str::FromStr};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Java).
    pub const JAVA: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(3) => "   ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(n) => write!(f, "{n}"),
            Self::Tab => f.write_str("tab"),
        }
    }
}

/// Parses `tab` or a supported space width (`2`, `3`, `4`, `8`).
impl FromStr for Indent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" | "tabs" => Ok(Self::Tab),
            "2" | "3" | "4" | "8" => s.parse().map(Self::Spaces).map_err(|e| format!("{e}")),
            other => Err(format!(
                "unsupported indent '{other}', expected tab, 2, 3, 4 or 8"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }

    #[test]
    fn test_parse() {
        assert_eq!("tab".parse::<Indent>(), Ok(Indent::Tab));
        assert_eq!("2".parse::<Indent>(), Ok(Indent::Spaces(2)));
        assert!("5".parse::<Indent>().is_err());
        assert!("wide".parse::<Indent>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for indent in [Indent::Tab, Indent::Spaces(3)] {
            assert_eq!(indent.to_string().parse::<Indent>(), Ok(indent));
        }
    }
}
