use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A UNIQUE constraint rejected the write. This is how the storage
    /// layer backstops key allocation and membership uniqueness.
    #[error("Duplicate value violates unique constraint: {message} {location}")]
    Duplicate {
        message: String,
        location: ErrorLocation,
    },

    #[error("Row decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    /// The reconciler exhausted every write strategy without the persisted
    /// value converging on the requested one.
    #[error(
        "Consistency check failed: requested {requested:?}, last observed {last_observed:?} {location}"
    )]
    Consistency {
        requested: String,
        last_observed: Option<String>,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        // Surface unique-constraint violations distinctly so callers can
        // answer with Conflict instead of an opaque internal error.
        if let sqlx::Error::Database(ref dbe) = source
            && dbe.is_unique_violation()
        {
            return Self::Duplicate {
                message: dbe.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn consistency<S: Into<String>>(requested: S, last_observed: Option<String>) -> Self {
        Self::Consistency {
            requested: requested.into(),
            last_observed,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
