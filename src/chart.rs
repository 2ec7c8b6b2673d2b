use std::path::Path;

use plotters::prelude::*;

use crate::{
	error::{Error, Result},
	standings::{PointsSeries, Standings, StandingsRow},
};

const SIZE: (u32, u32) = (960, 540);
const FONT: &str = "sans-serif";

const STAT_LABELS: [&str; 5] = ["Goals for", "Goals against", "Wins", "Draws", "Losses"];
// One slot per statistic plus an empty one between players.
const GROUP: usize = STAT_LABELS.len() + 1;

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Line chart of cumulative points against match index, one line per player.
pub fn points_chart(path: &Path, progression: &[PointsSeries]) -> Result<()> {
	draw_points(path, progression).map_err(|e| Error::Chart(e.to_string()))
}

/// Grouped bar chart of goals and results per player.
pub fn stats_chart(path: &Path, standings: &Standings) -> Result<()> {
	draw_stats(path, standings).map_err(|e| Error::Chart(e.to_string()))
}

fn draw_points(path: &Path, progression: &[PointsSeries]) -> DrawResult {
	let root = SVGBackend::new(path, SIZE).into_drawing_area();
	root.fill(&WHITE)?;

	let last_match = progression
		.first()
		.map_or(0, |series| series.totals.len().saturating_sub(1));

	let mut chart = ChartBuilder::on(&root)
		.caption("Cumulative points", (FONT, 24))
		.margin(16)
		.x_label_area_size(40)
		.y_label_area_size(48)
		.build_cartesian_2d(0usize..last_match.max(1), 0u32..points_ceiling(progression))?;

	chart
		.configure_mesh()
		.x_desc("Matches")
		.y_desc("Cumulative points")
		.draw()?;

	for (i, series) in progression.iter().enumerate() {
		let color = Palette99::pick(i).mix(0.9);

		chart
			.draw_series(LineSeries::new(
				series.totals.iter().copied().enumerate(),
				color.stroke_width(2),
			))?
			.label(series.player.as_str())
			.legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
	}

	chart
		.configure_series_labels()
		.background_style(WHITE.mix(0.8))
		.border_style(BLACK)
		.draw()?;

	root.present()?;
	Ok(())
}

fn draw_stats(path: &Path, standings: &Standings) -> DrawResult {
	let root = SVGBackend::new(path, SIZE).into_drawing_area();
	root.fill(&WHITE)?;

	let rows = standings.rows();
	let slots = (rows.len() * GROUP) as u32;

	let mut chart = ChartBuilder::on(&root)
		.caption("Player statistics", (FONT, 24))
		.margin(16)
		.x_label_area_size(40)
		.y_label_area_size(48)
		.build_cartesian_2d((0u32..slots).into_segmented(), 0u64..stats_ceiling(rows))?;

	chart
		.configure_mesh()
		.disable_x_mesh()
		.x_labels(slots as usize)
		.x_label_formatter(&|v: &SegmentValue<u32>| slot_label(rows, v))
		.x_desc("Players")
		.y_desc("Value")
		.draw()?;

	for (stat, label) in STAT_LABELS.iter().enumerate() {
		let color = Palette99::pick(stat).mix(0.9);

		chart
			.draw_series(rows.iter().enumerate().map(|(player, row)| {
				let slot = (player * GROUP + stat) as u32;
				Rectangle::new(
					[
						(SegmentValue::Exact(slot), 0),
						(SegmentValue::Exact(slot + 1), bar_values(row)[stat]),
					],
					color.filled(),
				)
			}))?
			.label(*label)
			.legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
	}

	chart
		.configure_series_labels()
		.background_style(WHITE.mix(0.8))
		.border_style(BLACK)
		.draw()?;

	root.present()?;
	Ok(())
}

fn bar_values(row: &StandingsRow) -> [u64; 5] {
	[
		row.goals_for,
		row.goals_against,
		u64::from(row.wins),
		u64::from(row.draws),
		u64::from(row.losses),
	]
}

fn points_ceiling(progression: &[PointsSeries]) -> u32 {
	let max = progression
		.iter()
		.flat_map(|series| series.totals.last())
		.copied()
		.max()
		.unwrap_or(0);

	max.saturating_add(1)
}

fn stats_ceiling(rows: &[StandingsRow]) -> u64 {
	let max = rows
		.iter()
		.flat_map(bar_values)
		.max()
		.unwrap_or(0);

	max.saturating_add(1)
}

// Names sit under the middle bar of each player's group.
fn slot_label(rows: &[StandingsRow], value: &SegmentValue<u32>) -> String {
	match value {
		SegmentValue::CenterOf(slot) if *slot as usize % GROUP == STAT_LABELS.len() / 2 => rows
			.get(*slot as usize / GROUP)
			.map(|row| row.player.clone())
			.unwrap_or_default(),
		_ => String::new(),
	}
}
