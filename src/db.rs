use std::{io, path::Path};

use rusqlite::{params, Connection};
use tracing::{debug, info, warn};

use crate::{
	data::{Match, NewMatch, Roster},
	error::{Result, ValidationError},
};

pub fn create_schema(conn: &mut Connection) -> rusqlite::Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id       INTEGER PRIMARY KEY AUTOINCREMENT,
			player_a TEXT    NOT NULL,
			score_a  INTEGER NOT NULL,
			player_b TEXT    NOT NULL,
			score_b  INTEGER NOT NULL
		);",
		[],
	)?;

	tx.commit()
}

/// Append/delete-only log of match results.
///
/// Owns the single connection for the life of the process. Every write is one
/// statement (or one transaction for an import), so a failure never leaves a
/// half-written result behind.
pub struct MatchStore {
	conn: Connection,
	roster: Roster,
}

impl MatchStore {
	pub fn open(path: &Path, roster: Roster) -> Result<Self> {
		debug!(path = %path.display(), "opening match store");
		Self::with_connection(Connection::open(path)?, roster)
	}

	pub fn open_in_memory(roster: Roster) -> Result<Self> {
		Self::with_connection(Connection::open_in_memory()?, roster)
	}

	fn with_connection(mut conn: Connection, roster: Roster) -> Result<Self> {
		create_schema(&mut conn)?;
		Ok(Self { conn, roster })
	}

	pub fn roster(&self) -> &Roster {
		&self.roster
	}

	/// Records a result and returns its new id.
	pub fn append(
		&self,
		player_a: &str,
		score_a: i64,
		player_b: &str,
		score_b: i64,
	) -> Result<i64> {
		let (score_a, score_b) = validate(&self.roster, player_a, score_a, player_b, score_b)?;

		insert(&self.conn, player_a, score_a, player_b, score_b)?;
		let id = self.conn.last_insert_rowid();

		info!(id, player_a, score_a, player_b, score_b, "recorded match");
		Ok(id)
	}

	/// Removes the match with `id`. A missing id is not an error; the return
	/// value only says whether anything was removed.
	pub fn delete(&self, id: i64) -> Result<bool> {
		let removed = self.conn.execute("DELETE FROM matches WHERE id = ?1;", [id])? > 0;

		if removed {
			info!(id, "deleted match");
		} else {
			warn!(id, "no match with this id, nothing deleted");
		}

		Ok(removed)
	}

	pub fn list_all(&self) -> Result<Vec<Match>> {
		let mut stmt = self.conn.prepare(
			"SELECT id, player_a, score_a, player_b, score_b
			 FROM matches
			 ORDER BY id ASC;",
		)?;

		let matches = stmt
			.query_map([], |row| {
				Ok(Match {
					id: row.get(0)?,
					player_a: row.get(1)?,
					score_a: row.get(2)?,
					player_b: row.get(3)?,
					score_b: row.get(4)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		debug!(count = matches.len(), "loaded matches");
		Ok(matches)
	}

	/// Appends every row of a `player_a,score_a,player_b,score_b` CSV in one
	/// transaction. The first invalid row aborts the import and nothing is
	/// written.
	pub fn import_csv<R: io::Read>(&mut self, reader: R) -> Result<Vec<i64>> {
		let mut rdr = csv::ReaderBuilder::new()
			.trim(csv::Trim::All)
			.from_reader(reader);

		let rows = rdr
			.deserialize::<NewMatch>()
			.collect::<Result<Vec<_>, csv::Error>>()?;

		let mut checked = Vec::with_capacity(rows.len());
		for row in &rows {
			let scores = validate(
				&self.roster,
				&row.player_a,
				row.score_a,
				&row.player_b,
				row.score_b,
			)?;
			checked.push((row, scores));
		}

		let tx = self.conn.transaction()?;
		let mut ids = Vec::with_capacity(checked.len());
		for (row, (score_a, score_b)) in checked {
			insert(&tx, &row.player_a, score_a, &row.player_b, score_b)?;
			ids.push(tx.last_insert_rowid());
		}
		tx.commit()?;

		info!(count = ids.len(), "imported matches");
		Ok(ids)
	}

	/// Writes every match, id included, as CSV. Returns how many were written.
	pub fn export_csv<W: io::Write>(&self, writer: W) -> Result<usize> {
		let matches = self.list_all()?;

		let mut wtr = csv::Writer::from_writer(writer);
		for m in &matches {
			wtr.serialize(m)?;
		}
		wtr.flush()?;

		Ok(matches.len())
	}
}

fn insert(
	conn: &Connection,
	player_a: &str,
	score_a: u32,
	player_b: &str,
	score_b: u32,
) -> rusqlite::Result<()> {
	let mut stmt = conn.prepare_cached(
		"INSERT INTO matches (player_a, score_a, player_b, score_b)
		 VALUES (?1, ?2, ?3, ?4);",
	)?;
	stmt.execute(params![player_a, score_a, player_b, score_b])?;

	Ok(())
}

fn validate(
	roster: &Roster,
	player_a: &str,
	score_a: i64,
	player_b: &str,
	score_b: i64,
) -> Result<(u32, u32), ValidationError> {
	let score_a = check_score(player_a, score_a)?;
	let score_b = check_score(player_b, score_b)?;

	if player_a == player_b {
		return Err(ValidationError::SamePlayer(player_a.to_owned()));
	}

	for player in [player_a, player_b] {
		if !roster.contains(player) {
			return Err(ValidationError::UnknownPlayer(player.to_owned()));
		}
	}

	Ok((score_a, score_b))
}

fn check_score(player: &str, score: i64) -> Result<u32, ValidationError> {
	if score < 0 {
		return Err(ValidationError::NegativeScore {
			player: player.to_owned(),
			score,
		});
	}

	u32::try_from(score).map_err(|_| ValidationError::ScoreTooLarge {
		player: player.to_owned(),
		score,
	})
}
