use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub fn new(id: u32) -> Self {
                Self(id)
            }

            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| format!("Invalid {}: {}", stringify!($name), s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a competition (a league or tournament)
    ///
    /// Only digits are accepted when parsing, so an id is always safe to use
    /// as a path segment in the data directory.
    ///
    /// # Example
    /// ```
    /// use pitchside_api::domain::competition::CompetitionId;
    ///
    /// let id: CompetitionId = "43".parse().expect("numeric id");
    /// assert_eq!(id.value(), 43);
    /// assert!("../etc".parse::<CompetitionId>().is_err());
    /// ```
    CompetitionId
);

numeric_id!(
    /// Identifier of one season of a competition
    SeasonId
);

numeric_id!(
    /// Identifier of a single match
    MatchId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits() {
        assert_eq!("11".parse::<CompetitionId>(), Ok(CompetitionId::new(11)));
        assert_eq!(" 90 ".parse::<SeasonId>(), Ok(SeasonId::new(90)));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!("abc".parse::<CompetitionId>().is_err());
        assert!("".parse::<SeasonId>().is_err());
        assert!("-1".parse::<MatchId>().is_err());
    }

    #[test]
    fn rejects_path_segments() {
        assert!("../../etc/passwd".parse::<CompetitionId>().is_err());
        assert!("3/4".parse::<SeasonId>().is_err());
    }

    #[test]
    fn display_is_plain_number() {
        assert_eq!(MatchId::new(7298).to_string(), "7298");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&SeasonId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
