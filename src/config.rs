use std::{
	fs,
	path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::debug;

use crate::{data::Roster, error::ConfigError};

pub const DEFAULT_CONFIG: &str = "leaguetable.toml";
pub const DEFAULT_DATABASE: &str = "data.db";
pub const DEFAULT_PLAYERS: [&str; 3] = ["Luiz", "Mateus", "Jhonatan"];

/// Contents of the optional TOML config file.
///
/// ```toml
/// database = "league.db"
/// players = ["Luiz", "Mateus", "Jhonatan"]
/// ```
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
	pub database: Option<PathBuf>,
	pub players: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct Config {
	pub database: PathBuf,
	pub roster: Roster,
}

impl Config {
	/// Command-line values win over the file, the file wins over defaults.
	pub fn resolve(
		file: FileConfig,
		database: Option<PathBuf>,
		players: Vec<String>,
	) -> Result<Self, ConfigError> {
		let database = database
			.or(file.database)
			.unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

		let roster = if !players.is_empty() {
			Roster::new(players)?
		} else if let Some(players) = file.players {
			Roster::new(players)?
		} else {
			Roster::new(DEFAULT_PLAYERS)?
		};

		Ok(Self { database, roster })
	}
}

/// Reads `explicit` if given. Otherwise reads [`DEFAULT_CONFIG`] from the
/// working directory when it exists, and falls back to an empty config.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
	match explicit {
		Some(path) => load_file(path),
		None => {
			let path = Path::new(DEFAULT_CONFIG);
			if path.exists() {
				load_file(path)
			} else {
				Ok(FileConfig::default())
			}
		}
	}
}

pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
	debug!(path = %path.display(), "reading config");

	let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
		path: path.to_owned(),
		source,
	})?;

	toml::from_str(&text).map_err(|source| ConfigError::Parse {
		path: path.to_owned(),
		source,
	})
}
