use leaguetable::{
	data::Roster,
	db::MatchStore,
	error::{Error, ValidationError},
	report,
	standings::{compute, points_progression},
};

fn must<T>(result: Result<T, Error>) -> T {
	match result {
		Ok(value) => value,
		Err(err) => panic!("test failure: {err}"),
	}
}

fn store(names: &[&str]) -> MatchStore {
	let roster = match Roster::new(names.iter().copied()) {
		Ok(roster) => roster,
		Err(err) => panic!("test failure: {err}"),
	};
	must(MatchStore::open_in_memory(roster))
}

#[test]
fn recorded_results_drive_the_table() {
	let store = store(&["A", "B"]);
	must(store.append("A", 2, "B", 1));
	must(store.append("A", 1, "B", 1));

	let table = compute(store.roster(), &must(store.list_all()));
	let summary = |name: &str| {
		table.get(name).map(|r| {
			(
				r.games_played,
				r.wins,
				r.draws,
				r.losses,
				r.points,
				r.goals_for,
				r.goals_against,
			)
		})
	};
	let a = summary("A");
	let b = summary("B");

	assert_eq!(a, Some((2, 1, 1, 0, 4, 3, 2)));
	assert_eq!(b, Some((2, 0, 1, 1, 1, 2, 3)));
}

#[test]
fn deleting_a_result_removes_it_from_the_table() {
	let store = store(&["A", "B", "C"]);
	let keep = must(store.append("A", 3, "C", 0));
	let gone = must(store.append("B", 5, "A", 0));

	assert!(must(store.delete(gone)));
	assert!(!must(store.delete(gone)));

	let matches = must(store.list_all());
	assert!(matches.iter().all(|m| m.id != gone));
	assert_eq!(matches.iter().map(|m| m.id).collect::<Vec<_>>(), [keep]);

	let table = compute(store.roster(), &matches);
	assert_eq!(table.get("B").map(|r| r.games_played), Some(0));
	assert_eq!(table.get("A").map(|r| r.points), Some(3));
}

#[test]
fn rejected_result_leaves_everything_unchanged() {
	let store = store(&["A", "B"]);
	must(store.append("A", 0, "B", 2));
	let before = report::standings_table(&compute(store.roster(), &must(store.list_all())));

	for (a, sa, b, sb, expected) in [
		("A", -1, "B", 0, ValidationError::NegativeScore { player: "A".into(), score: -1 }),
		("A", 1, "A", 0, ValidationError::SamePlayer("A".into())),
		("A", 1, "Nobody", 0, ValidationError::UnknownPlayer("Nobody".into())),
	] {
		match store.append(a, sa, b, sb) {
			Err(Error::Validation(err)) => assert_eq!(err, expected),
			other => panic!("expected a validation error, got {other:?}"),
		}
	}

	let after = report::standings_table(&compute(store.roster(), &must(store.list_all())));
	assert_eq!(before, after);
}

#[test]
fn progression_tracks_every_recorded_match() {
	let store = store(&["A", "B", "C"]);
	must(store.append("A", 1, "B", 0));
	must(store.append("B", 2, "C", 2));
	must(store.append("C", 4, "A", 1));

	let matches = must(store.list_all());
	let table = compute(store.roster(), &matches);

	for series in points_progression(store.roster(), &matches) {
		assert_eq!(series.totals.len(), 3);
		assert_eq!(series.totals.last().copied(), table.get(&series.player).map(|r| r.points));
	}
}

#[test]
fn largest_accepted_scores_still_produce_a_table() {
	let store = store(&["A", "B"]);
	let max = i64::from(u32::MAX);
	must(store.append("A", max, "B", 0));
	must(store.append("A", max, "B", 0));

	let table = compute(store.roster(), &must(store.list_all()));
	assert_eq!(table.get("A").map(|r| r.goals_for), Some(2 * u64::from(u32::MAX)));
	assert!(report::standings_table(&table).contains("8589934590"));
}
