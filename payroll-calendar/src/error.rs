use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A pay frequency keyword that is none of the supported ones.
    UnknownFrequency(String),
    /// A pay amount that can't be applied to a payday.
    InvalidAmount(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFrequency(raw) => {
                write!(f, "unknown pay frequency `{raw}`: expected weekly, biweekly or monthly")
            }
            Self::InvalidAmount(raw) => {
                write!(f, "invalid pay amount `{raw}`: expected a non-negative number")
            }
        }
    }
}

impl std::error::Error for Error {}
