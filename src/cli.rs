/*!

Command-line surface (§6, §10.B): two subcommands, each followed by free
`key=value` arguments overriding the defaults named in the specification.

*/

use std::path::PathBuf;

use getopts::Options;

use crate::error::{Error, Result};

const BUILD_ROUTINGS_USAGE: &str = "sensorpaths build_routings [options] [num_sensors=100] [communication_range=20.0] [out=svg]";
const CALCULATE_METRICS_USAGE: &str = "sensorpaths calculate_routing_metrics [options] [num_sensors=100] [times=20] [lower=25.0] [upper=50.0] [step=0.1] [out=tables]";

///Parsed arguments for `build_routings`: one SVG per standard builder.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildRoutingsArgs
{
	pub num_sensors: usize,
	pub communication_range: f64,
	pub out_dir: PathBuf,
}

impl Default for BuildRoutingsArgs
{
	fn default() -> BuildRoutingsArgs
	{
		BuildRoutingsArgs{num_sensors: 100, communication_range: 20.0, out_dir: PathBuf::from("svg")}
	}
}

///Parsed arguments for `calculate_routing_metrics`: a Monte-Carlo sweep
///writing one table per standard calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateMetricsArgs
{
	pub num_sensors: usize,
	pub times: usize,
	pub lower: f64,
	pub upper: f64,
	pub step: f64,
	pub out_dir: PathBuf,
}

impl Default for CalculateMetricsArgs
{
	fn default() -> CalculateMetricsArgs
	{
		CalculateMetricsArgs{num_sensors: 100, times: 20, lower: 25.0, upper: 50.0, step: 0.1, out_dir: PathBuf::from("tables")}
	}
}

///Either of the two subcommands, parsed and ready to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Command
{
	BuildRoutings(BuildRoutingsArgs),
	CalculateRoutingMetrics(CalculateMetricsArgs),
	///`-h`/`--help` was passed; usage text has already been decided by the caller.
	Help(String),
}

///Parses `std::env::args().skip(1)`-style arguments: a subcommand name
///followed by free `key=value` pairs. Returns a `Config` error for an
///unrecognized subcommand, an unrecognized key, or a value that fails to
///parse as the expected type.
pub fn parse(args: &[String]) -> Result<Command>
{
	let mut options = Options::new();
	options.optflag("h", "help", "print usage and exit");

	let (subcommand, rest) = match args.split_first()
	{
		Some((first, rest)) => (first.as_str(), rest),
		None => return Err(Error::config("expected a subcommand: build_routings or calculate_routing_metrics")),
	};

	let matches = options.parse(rest).map_err(Error::config)?;

	match subcommand
	{
		"build_routings" =>
		{
			if matches.opt_present("h")
			{
				return Ok(Command::Help(options.usage(BUILD_ROUTINGS_USAGE)));
			}
			parse_build_routings(&matches.free).map(Command::BuildRoutings)
		}
		"calculate_routing_metrics" =>
		{
			if matches.opt_present("h")
			{
				return Ok(Command::Help(options.usage(CALCULATE_METRICS_USAGE)));
			}
			parse_calculate_metrics(&matches.free).map(Command::CalculateRoutingMetrics)
		}
		other => Err(Error::config(format!("unrecognized subcommand '{}'", other))),
	}
}

fn parse_build_routings(free: &[String]) -> Result<BuildRoutingsArgs>
{
	let mut args = BuildRoutingsArgs::default();
	for pair in free
	{
		let (key, value) = split_pair(pair)?;
		match key
		{
			"num_sensors" => args.num_sensors = parse_value(key, value)?,
			"communication_range" => args.communication_range = parse_value(key, value)?,
			"out" => args.out_dir = PathBuf::from(value),
			_ => return Err(Error::config(format!("unrecognized key '{}'", key))),
		}
	}
	Ok(args)
}

fn parse_calculate_metrics(free: &[String]) -> Result<CalculateMetricsArgs>
{
	let mut args = CalculateMetricsArgs::default();
	for pair in free
	{
		let (key, value) = split_pair(pair)?;
		match key
		{
			"num_sensors" => args.num_sensors = parse_value(key, value)?,
			"times" => args.times = parse_value(key, value)?,
			"lower" => args.lower = parse_value(key, value)?,
			"upper" => args.upper = parse_value(key, value)?,
			"step" => args.step = parse_value(key, value)?,
			"out" => args.out_dir = PathBuf::from(value),
			_ => return Err(Error::config(format!("unrecognized key '{}'", key))),
		}
	}
	Ok(args)
}

fn split_pair(pair: &str) -> Result<(&str, &str)>
{
	pair.split_once('=').ok_or_else(|| Error::config(format!("expected key=value, got '{}'", pair)))
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
{
	value.parse().map_err(|_| Error::config(format!("could not parse '{}' as a value for '{}'", value, key)))
}
