use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How often a payday recurs.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Frequency {
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Biweekly,
    /// Once a month, on the anchor's day of month.
    Monthly,
}

impl Frequency {
    /// Fixed step in days between two paydays, or `None` for the monthly
    /// rule, which follows the day of month instead.
    pub fn step_days(self) -> Option<u32> {
        match self {
            Self::Weekly => Some(7),
            Self::Biweekly => Some(14),
            Self::Monthly => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = Error;

    /// Parse a frequency keyword, ignoring case and surrounding spaces.
    ///
    /// ```
    /// use payroll_calendar::Frequency;
    ///
    /// assert_eq!("biweekly".parse(), Ok(Frequency::Biweekly));
    /// assert_eq!(" Monthly ".parse(), Ok(Frequency::Monthly));
    /// assert!("fortnightly".parse::<Frequency>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(Error::UnknownFrequency(s.trim().to_string())),
        }
    }
}
