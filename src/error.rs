use std::{io, path::PathBuf};

use thiserror::Error;

/// Rejected input to [`MatchStore::append`](crate::db::MatchStore::append).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
	#[error("score for {player} must not be negative (got {score})")]
	NegativeScore { player: String, score: i64 },

	#[error("score for {player} is too large (got {score})")]
	ScoreTooLarge { player: String, score: i64 },

	#[error("{0} cannot play against themselves")]
	SamePlayer(String),

	#[error("{0} is not in the roster")]
	UnknownPlayer(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("the roster needs at least one player")]
	EmptyRoster,

	#[error("{0} appears more than once in the roster")]
	DuplicatePlayer(String),

	#[error("could not read config file {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("could not parse config file {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error("database error: {0}")]
	Sqlite(#[from] rusqlite::Error),

	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error("could not draw chart: {0}")]
	Chart(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
