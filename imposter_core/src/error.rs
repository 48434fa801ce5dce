use std::fmt;

use itertools::Itertools;

use crate::{player::PlayerId, round::GameMode};

#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The category filter matched nothing or the store is empty.
    NoWord,
    /// A record came back without a canonical term.
    InvalidRecord(String),
    /// Network or provider failure.
    Provider(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NoWord => write!(f, "no word available"),
            ResolveError::InvalidRecord(id) => write!(f, "word record {id} has no canonical term"),
            ResolveError::Provider(reason) => write!(f, "provider failure: {reason}"),
        }
    }
}

impl std::error::Error for ResolveError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    NotInSetup,
    PlayerCount { mode: GameMode, count: usize },
    UnknownPlayer(PlayerId),
    /// Zero-based seats with a blank name.
    MissingNames(Vec<PlayerId>),
    NotRevealing,
    CardClosed,
    NotComplete,
    /// A prepared round does not match the session's mode.
    RoundMode { expected: GameMode, got: GameMode },
    Compose(ResolveError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotInSetup => write!(f, "the roster can only change during setup"),
            SessionError::PlayerCount { mode, count } => {
                let (min, max) = mode.player_bounds();
                write!(f, "{mode} needs {min} to {max} players, got {count}")
            }
            SessionError::UnknownPlayer(id) => write!(f, "there is no player {}", id + 1),
            SessionError::MissingNames(seats) => write!(
                f,
                "missing name for player {}",
                seats.iter().map(|s| s + 1).join(", ")
            ),
            SessionError::NotRevealing => write!(f, "no card is being revealed"),
            SessionError::CardClosed => write!(f, "the current card has not been opened yet"),
            SessionError::NotComplete => write!(f, "the round is not complete yet"),
            SessionError::RoundMode { expected, got } => {
                write!(f, "a {got} round cannot be played in {expected} mode")
            }
            SessionError::Compose(e) => write!(f, "could not start the round: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<ResolveError> for SessionError {
    fn from(e: ResolveError) -> Self {
        SessionError::Compose(e)
    }
}
