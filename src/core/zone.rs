use std::fmt::{Display, Formatter};

/// Swedish bidding zone, passed through to the price provider as is.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, clap::ValueEnum)]
pub enum Zone {
    /// Luleå, northern Sweden.
    #[value(name = "SE1")]
    Se1,

    /// Sundsvall, northern central Sweden.
    #[value(name = "SE2")]
    Se2,

    /// Stockholm, southern central Sweden.
    #[value(name = "SE3")]
    Se3,

    /// Malmö, southern Sweden.
    #[value(name = "SE4")]
    Se4,
}

impl Zone {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Se1 => "SE1",
            Self::Se2 => "SE2",
            Self::Se3 => "SE3",
            Self::Se4 => "SE4",
        }
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn test_parse_ignoring_case() {
        assert_eq!(Zone::from_str("se3", true), Ok(Zone::Se3));
        assert_eq!(Zone::from_str("SE4", false), Ok(Zone::Se4));
        assert!(Zone::from_str("SE5", true).is_err());
    }

    #[test]
    fn test_display_code() {
        assert_eq!(Zone::Se1.to_string(), "SE1");
        assert_eq!(Zone::Se2.to_string(), "SE2");
    }
}
