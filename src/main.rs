use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;

use sensorpaths::cli::{self, BuildRoutingsArgs, CalculateMetricsArgs, Command};
use sensorpaths::error::{Error, Result};
use sensorpaths::geometry::Region;
use sensorpaths::metrics::Metric;
use sensorpaths::network::Network;
use sensorpaths::placement::place_connected;
use sensorpaths::routing::RoutingBuilder;
use sensorpaths::svg;
use sensorpaths::sweep::{sweep_metrics, write_tables};

fn main() -> ExitCode
{
	let args: Vec<String> = std::env::args().skip(1).collect();
	match run(&args)
	{
		Ok(()) => ExitCode::SUCCESS,
		Err(err) =>
		{
			eprintln!("error: {}", err);
			ExitCode::FAILURE
		}
	}
}

fn run(args: &[String]) -> Result<()>
{
	match cli::parse(args)?
	{
		Command::Help(usage) =>
		{
			println!("{}", usage);
			Ok(())
		}
		Command::BuildRoutings(args) => build_routings(args),
		Command::CalculateRoutingMetrics(args) => calculate_routing_metrics(args),
	}
}

fn build_routings(args: BuildRoutingsArgs) -> Result<()>
{
	let mut rng = StdRng::from_entropy();
	let region = default_region(args.num_sensors);
	let positions = place_connected(args.num_sensors, &region, args.communication_range, &mut rng, 10)?;

	let mut network = Network::new();
	if !network.deploy(&positions, args.communication_range)
	{
		return Err(Error::config("placed positions were not channel-connected at the requested range"));
	}

	let builders = RoutingBuilder::standard_builders();
	println!("deploying {} sensors at range {}, writing {} SVGs to {}", args.num_sensors, args.communication_range, builders.len(), args.out_dir.display());
	for builder in &builders
	{
		if !builder.build(&mut network, &mut rng)
		{
			return Err(Error::config("routing build failed on a deployment reported as channel-connected"));
		}
		svg::write_to_file(&network, &builder.name, &builder.title, &region, 10.0, &args.out_dir)?;
	}
	Ok(())
}

fn calculate_routing_metrics(args: CalculateMetricsArgs) -> Result<()>
{
	let mut rng = StdRng::from_entropy();
	let region = default_region(args.num_sensors);
	let builders = RoutingBuilder::standard_builders();
	let calculators = Metric::standard_calculators();

	println!(
		"sweeping range {}..={} step {} over {} trials per point, {} sensors",
		args.lower, args.upper, args.step, args.times, args.num_sensors
	);
	let tables = sweep_metrics(args.num_sensors, args.times, args.lower, args.upper, args.step, &region, &builders, &calculators, &mut rng);
	write_tables(&tables, &args.out_dir)?;
	println!("wrote {} tables to {}", tables.len(), args.out_dir.display());
	Ok(())
}

///A square region wide enough to keep sensor density roughly constant as
///`num_sensors` grows, centered on the specification's default event point.
fn default_region(num_sensors: usize) -> Region
{
	let half_width = 25.0 + (num_sensors as f64).sqrt();
	Region::new(50.0 - half_width, 50.0 + half_width, 50.0 - half_width, 50.0 + half_width)
}
