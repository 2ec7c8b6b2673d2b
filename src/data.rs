use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
	pub id: i64,
	pub player_a: String,
	pub score_a: u32,
	pub player_b: String,
	pub score_b: u32,
}

impl Match {
	/// Points `player` took from this match: 3 for a win, 1 for a draw and 0
	/// for a loss or for a match they did not play.
	pub fn points_for(&self, player: &str) -> u32 {
		let (own, other) = if self.player_a == player {
			(self.score_a, self.score_b)
		} else if self.player_b == player {
			(self.score_b, self.score_a)
		} else {
			return 0;
		};

		match own.cmp(&other) {
			std::cmp::Ordering::Greater => 3,
			std::cmp::Ordering::Equal => 1,
			std::cmp::Ordering::Less => 0,
		}
	}
}

/// A result as submitted, before the store has checked it or given it an id.
///
/// Scores are signed so that a negative value reaches validation instead of
/// failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewMatch {
	pub player_a: String,
	pub score_a: i64,
	pub player_b: String,
	pub score_b: i64,
}

/// The fixed, ordered list of players that may appear in a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
	players: Vec<String>,
}

impl Roster {
	pub fn new<I, S>(players: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let players: Vec<String> = players.into_iter().map(Into::into).collect();

		if players.is_empty() {
			return Err(ConfigError::EmptyRoster);
		}

		let mut seen = HashSet::with_capacity(players.len());
		for name in &players {
			if !seen.insert(name.as_str()) {
				return Err(ConfigError::DuplicatePlayer(name.clone()));
			}
		}

		Ok(Self { players })
	}

	pub fn contains(&self, name: &str) -> bool {
		self.players.iter().any(|p| p == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.players.iter().map(String::as_str)
	}
}
