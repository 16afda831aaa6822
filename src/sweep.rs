/*!

Monte-Carlo sweep driver (§6, §10.G): for each swept communication range,
runs several independent random deployments, builds every routing policy over
each, evaluates every metric, and averages across trials.

*/

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;

use crate::error::Result;
use crate::geometry::Region;
use crate::metrics::Metric;
use crate::network::Network;
use crate::placement::place_connected;
use crate::routing::RoutingBuilder;
use crate::table::MetricTable;

const PLACEMENT_ATTEMPTS: usize = 10;

///Runs the sweep described in §6's `calculate_routing_metrics` subcommand:
///one [`MetricTable`] per calculator, a row per range value in
///`lower..=upper` stepping by `step`, one column per builder. Each cell
///averages `times` independent trials, excluding the "no sample" sentinel
///(§7.3) from the denominator; a cell with zero usable trials is written as
///`0.0`.
pub fn sweep_metrics(
	num_sensors: usize,
	times: usize,
	lower: f64,
	upper: f64,
	step: f64,
	region: &Region,
	builders: &[RoutingBuilder],
	calculators: &[Metric],
	rng: &mut StdRng,
) -> Vec<MetricTable>
{
	let ranges: Vec<f64> = ranges_between(lower, upper, step);
	let total_steps = (ranges.len() * times) as u64;
	let progress = ProgressBar::new(total_steps);
	progress.set_style(ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} ({eta})"));

	//accumulators[metric_index][builder_index] = (sum, count)
	let mut tables: Vec<MetricTable> = calculators
		.iter()
		.map(|m| MetricTable{
			metric_name: m.name().to_string(),
			builder_names: builders.iter().map(|b| b.name.clone()).collect(),
			rows: Vec::new(),
		})
		.collect();

	for &range in &ranges
	{
		let mut sums = vec![vec![0.0f64; builders.len()]; calculators.len()];
		let mut counts = vec![vec![0usize; builders.len()]; calculators.len()];

		for _ in 0..times
		{
			if let Ok(positions) = place_connected(num_sensors, region, range, rng, PLACEMENT_ATTEMPTS)
			{
				let mut network = Network::new();
				if network.deploy(&positions, range)
				{
					for (bi, builder) in builders.iter().enumerate()
					{
						if builder.build(&mut network, rng)
						{
							for (mi, metric) in calculators.iter().enumerate()
							{
								let value = metric.evaluate(&network);
								if !metric.is_no_sample(value)
								{
									sums[mi][bi] += value;
									counts[mi][bi] += 1;
								}
							}
						}
					}
				}
			}
			progress.inc(1);
		}

		for (mi, table) in tables.iter_mut().enumerate()
		{
			let values: Vec<f64> = (0..builders.len())
				.map(|bi| if counts[mi][bi] > 0 { sums[mi][bi] / counts[mi][bi] as f64 } else { 0.0 })
				.collect();
			table.rows.push((range, values));
		}
	}
	progress.finish_and_clear();
	tables
}

///Writes every table in `tables` to `directory`, one file per calculator.
pub fn write_tables(tables: &[MetricTable], directory: &std::path::Path) -> Result<()>
{
	for table in tables
	{
		table.write_to_file(directory)?;
	}
	Ok(())
}

fn ranges_between(lower: f64, upper: f64, step: f64) -> Vec<f64>
{
	assert!(step > 0.0, "sweep step must be positive");
	let mut values = Vec::new();
	let mut r = lower;
	//a small epsilon guards against the last step being dropped by
	//floating-point accumulation error.
	while r <= upper + step * 1e-6
	{
		values.push(r);
		r += step;
	}
	values
}
