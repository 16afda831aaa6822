/*!

Error types for the collaborator layer (placement, rendering, table writing,
the sweep driver and the CLI). The core modules (`geometry`, `network`,
`routing`, `metrics`, `mst`) do not return these: a malformed deployment is
signalled by `Network::deploy` returning `false`, and a violated invariant is
a programmer error, asserted rather than recovered from.

*/

use std::fmt;
use std::io;

///Everything that can go wrong outside of the core algorithms.
#[derive(thiserror::Error, Debug)]
pub enum Error
{
	///A file could not be written (SVG document, metric table).
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
	///A CLI argument was missing, unrecognized, or failed to parse.
	#[error("configuration error: {0}")]
	Config(String),
	///Random placement could not reach a channel-connected deployment within
	///the retry budget.
	#[error("could not place {num_sensors} sensors connected at range {range} after {attempts} attempts")]
	Placement
	{
		num_sensors: usize,
		range: f64,
		attempts: usize,
	},
}

///Convenience alias used throughout the collaborator layer.
pub type Result<T> = std::result::Result<T, Error>;

impl Error
{
	///Build a `Config` error from anything `Display`-able. Used when parsing
	///a `key=value` free argument.
	pub fn config(message: impl fmt::Display) -> Error
	{
		Error::Config(message.to_string())
	}
}
