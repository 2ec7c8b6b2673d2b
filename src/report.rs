use std::io;

use crate::{data::Match, error::Result, standings::Standings};

const NO_MATCHES: &str = "No matches recorded yet.\n";

pub fn matches_table(matches: &[Match]) -> String {
	if matches.is_empty() {
		return NO_MATCHES.to_owned();
	}

	let mut string = String::from("# Matches\n```");

	for m in matches {
		string.push_str(&format!(
			"\n{:>4}: {} ({}) x ({}) {}",
			m.id, m.player_a, m.score_a, m.score_b, m.player_b
		));
	}

	string.push_str("\n```\n");

	string
}

pub fn standings_table(standings: &Standings) -> String {
	let width = standings
		.rows()
		.iter()
		.map(|row| row.player.chars().count())
		.max()
		.unwrap_or(0)
		.max("Player".len());

	let mut string = String::from("# Standings\n```");
	string.push_str(&format!(
		"\n{:<width$} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4}",
		"Player", "GP", "GF", "GA", "GD", "W", "D", "L", "Pts"
	));

	for row in standings.rows() {
		string.push_str(&format!(
			"\n{:<width$} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4}",
			row.player,
			row.games_played,
			row.goals_for,
			row.goals_against,
			row.goal_difference(),
			row.wins,
			row.draws,
			row.losses,
			row.points,
		));
	}

	string.push_str("\n```\n");

	string
}

pub fn standings_csv<W: io::Write>(standings: &Standings, writer: W) -> Result<()> {
	let mut wtr = csv::Writer::from_writer(writer);
	for row in standings.rows() {
		wtr.serialize(row)?;
	}
	wtr.flush()?;

	Ok(())
}
