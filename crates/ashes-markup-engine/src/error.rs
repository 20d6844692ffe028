use thiserror::Error;

/// Errors raised while building a [`Formatter`](crate::Formatter).
///
/// Formatting itself never fails: malformed markup falls through to text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("Site domain must not be empty")]
    EmptySiteDomain,

    #[error("Invalid dice keyword {keyword:?}: expected lowercase ASCII letters")]
    InvalidDiceKeyword { keyword: String },
}
