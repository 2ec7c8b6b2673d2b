use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Record match results and show the league table",
	long_about = None
)]
pub struct Cli {
	/// Write text output to FILE instead of stdout
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// TOML config file [default: leaguetable.toml, if present]
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	#[arg(long, value_name = "PATH", env = "LEAGUETABLE_DB")]
	pub database: Option<PathBuf>,

	/// Roster entry; repeat for each player
	#[arg(
		short,
		long = "player",
		value_name = "NAME",
		env = "LEAGUETABLE_PLAYERS",
		value_delimiter = ','
	)]
	pub players: Vec<String>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Save the result of one match
	Record {
		player_a: String,
		#[arg(allow_negative_numbers = true)]
		score_a: i64,
		player_b: String,
		#[arg(allow_negative_numbers = true)]
		score_b: i64,
	},
	/// Remove a saved match by id
	Delete { id: i64 },
	/// List every saved match
	Matches,
	/// Print the standings table
	Table {
		#[arg(long)]
		csv: bool,
	},
	/// Draw the cumulative points and statistics charts as SVG
	Chart {
		#[arg(long, value_name = "FILE")]
		points: Option<PathBuf>,
		#[arg(long, value_name = "FILE")]
		stats: Option<PathBuf>,
	},
	/// Append every match in a CSV file
	Import {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	/// Write every saved match as CSV
	Export,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn record_accepts_negative_scores_for_validation() {
		let cli = Cli::try_parse_from(["leaguetable", "record", "A", "-1", "B", "0"]).unwrap();
		match cli.command {
			Commands::Record { score_a, .. } => assert_eq!(score_a, -1),
			_ => panic!("expected record"),
		}
	}

	#[test]
	fn players_can_be_repeated() {
		let cli =
			Cli::try_parse_from(["leaguetable", "-p", "A", "--player", "B", "table"]).unwrap();
		assert_eq!(cli.players, ["A", "B"]);
	}
}
