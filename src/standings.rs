//! Per-player standings derived from the full match log.
//!
//! Nothing here is stored. Both [`compute`] and [`points_progression`] rebuild
//! their result from scratch on every call, so the output depends only on the
//! roster and the match sequence passed in.

use std::{cmp::Ordering, collections::HashMap};

use serde::Serialize;

use crate::data::{Match, Roster};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
	pub player: String,
	pub games_played: u32,
	pub goals_for: u64,
	pub goals_against: u64,
	pub wins: u32,
	pub draws: u32,
	pub losses: u32,
	pub points: u32,
}

impl StandingsRow {
	fn new(player: &str) -> Self {
		Self {
			player: player.to_owned(),
			games_played: 0,
			goals_for: 0,
			goals_against: 0,
			wins: 0,
			draws: 0,
			losses: 0,
			points: 0,
		}
	}

	pub fn goal_difference(&self) -> i64 {
		let signed = |goals: u64| i64::try_from(goals).unwrap_or(i64::MAX);
		signed(self.goals_for).saturating_sub(signed(self.goals_against))
	}

	// One match seen from this player's side.
	fn record(&mut self, scored: u32, conceded: u32) {
		self.games_played += 1;
		self.goals_for += u64::from(scored);
		self.goals_against += u64::from(conceded);

		match scored.cmp(&conceded) {
			Ordering::Greater => {
				self.wins += 1;
				self.points += 3;
			}
			Ordering::Equal => {
				self.draws += 1;
				self.points += 1;
			}
			Ordering::Less => self.losses += 1,
		}
	}
}

/// One row per roster player, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
	rows: Vec<StandingsRow>,
	index: HashMap<String, usize>,
}

impl Standings {
	pub fn get(&self, player: &str) -> Option<&StandingsRow> {
		self.index.get(player).map(|&i| &self.rows[i])
	}

	pub fn rows(&self) -> &[StandingsRow] {
		&self.rows
	}
}

/// Builds the standings table for `roster` from `matches`, in sequence order.
///
/// A match naming anyone outside the roster is skipped as a whole. The store
/// refuses such matches, so this only matters for rows written under an
/// earlier roster.
pub fn compute(roster: &Roster, matches: &[Match]) -> Standings {
	let mut rows: Vec<StandingsRow> = roster.iter().map(StandingsRow::new).collect();
	let index: HashMap<String, usize> = roster
		.iter()
		.enumerate()
		.map(|(i, player)| (player.to_owned(), i))
		.collect();

	for m in matches {
		let (Some(&a), Some(&b)) = (index.get(&m.player_a), index.get(&m.player_b)) else {
			continue;
		};

		rows[a].record(m.score_a, m.score_b);
		rows[b].record(m.score_b, m.score_a);
	}

	Standings { rows, index }
}

/// Running points total of one player across the whole match sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsSeries {
	pub player: String,
	/// `totals[i]` is the player's points after match `i`.
	pub totals: Vec<u32>,
}

/// Cumulative points per roster player, one value per match.
///
/// Every match advances every player's series. Matches a player did not take
/// part in add nothing to their total.
pub fn points_progression(roster: &Roster, matches: &[Match]) -> Vec<PointsSeries> {
	roster
		.iter()
		.map(|player| {
			let totals = matches
				.iter()
				.scan(0u32, |total, m| {
					if roster.contains(&m.player_a) && roster.contains(&m.player_b) {
						*total += m.points_for(player);
					}
					Some(*total)
				})
				.collect();

			PointsSeries {
				player: player.to_owned(),
				totals,
			}
		})
		.collect()
}
