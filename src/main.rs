mod cli;

use std::{
	fs::File,
	io::{self, BufReader, Write},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use leaguetable::{
	chart,
	config::{self, Config},
	db::MatchStore,
	report,
	standings,
};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "leaguetable=info".into()))
		.with(fmt::layer().with_writer(io::stderr))
		.init();

	let cli = Cli::parse();

	let file_config = config::load(cli.config.as_deref())?;
	let config = Config::resolve(file_config, cli.database, cli.players)?;

	let mut store = MatchStore::open(&config.database, config.roster)
		.with_context(|| format!("could not open {}", config.database.display()))?;

	let mut out = match cli.output.as_deref() {
		Some(path) => Box::new(
			File::create(path).with_context(|| format!("could not create {}", path.display()))?,
		) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	match cli.command {
		Commands::Record {
			player_a,
			score_a,
			player_b,
			score_b,
		} => {
			let id = store.append(&player_a, score_a, &player_b, score_b)?;
			writeln!(out, "Saved match {id}: {player_a} ({score_a}) x ({score_b}) {player_b}")?;
		}
		Commands::Delete { id } => {
			if store.delete(id)? {
				writeln!(out, "Deleted match {id}")?;
			} else {
				writeln!(out, "No match with id {id}")?;
			}
		}
		Commands::Matches => {
			out.write_all(report::matches_table(&store.list_all()?).as_bytes())?;
		}
		Commands::Table { csv } => {
			let table = standings::compute(store.roster(), &store.list_all()?);
			if csv {
				report::standings_csv(&table, &mut out)?;
			} else {
				out.write_all(report::standings_table(&table).as_bytes())?;
			}
		}
		Commands::Chart { points, stats } => {
			if points.is_none() && stats.is_none() {
				bail!("nothing to draw, pass --points and/or --stats");
			}

			let matches = store.list_all()?;
			debug!(count = matches.len(), "recomputing standings for charts");

			if let Some(path) = points {
				let progression = standings::points_progression(store.roster(), &matches);
				chart::points_chart(&path, &progression)?;
				writeln!(out, "Wrote {}", path.display())?;
			}
			if let Some(path) = stats {
				chart::stats_chart(&path, &standings::compute(store.roster(), &matches))?;
				writeln!(out, "Wrote {}", path.display())?;
			}
		}
		Commands::Import { matches } => {
			let file = File::open(&matches)
				.with_context(|| format!("could not open {}", matches.display()))?;
			let ids = store.import_csv(BufReader::new(file))?;
			writeln!(out, "Imported {} matches", ids.len())?;
		}
		Commands::Export => {
			store.export_csv(&mut out)?;
		}
	}

	out.flush()?;
	Ok(())
}
