/*!

Component F: the five metric calculators. Like the parent selectors, this is
a closed, finite family, dispatched through a tagged enum.

Three of the five (channel quality, data aggregation, latency) share an
*event model*: a fixed point in the plane and a sensing range around it that
determines which sensors are "triggered". The specification's present-day
constants (`event = (50, 50)`, `sensing_range = 15`) are kept as the
defaults but are not hard-coded into the calculators themselves.

*/

mod aggregation;
mod channel_quality;
mod degree_variance;
mod latency;
mod robustness;

use crate::geometry::Position;
use crate::network::Network;

///The event point and sensing range shared by the propagation-model
///metrics. Present-day defaults match the specification: `(50, 50)` with a
///sensing range of `15`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventModel
{
	pub position: Position,
	pub sensing_range: f64,
}

impl Default for EventModel
{
	fn default() -> EventModel
	{
		EventModel{position: Position::new(50.0, 50.0), sensing_range: 15.0}
	}
}

///Noise floor chosen so the bit error rate is exactly `10^-3` at the
///communication range; see [`channel_quality::bit_accuracy_rate`].
pub const DEFAULT_NOISE: f64 = 0.209434;

///One of the five metric calculators.
#[derive(Clone, Copy, Debug)]
pub enum Metric
{
	///Variance of the per-sensor parent in-degree. Lower is better.
	DegreeVariance,
	///Fraction of sensors that stay connected after the most-used non-sink
	///sensor is removed. Higher is better.
	Robustness,
	///Mean link error rate to triggered sensors under a bit-accuracy
	///propagation model. Lower is better.
	ChannelQuality{ event: EventModel, noise: f64 },
	///Total transmissions under in-network aggregation from triggered
	///sensors to the sink. Lower is better.
	DataAggregation{ event: EventModel },
	///Parallel broadcast time from triggered sensors to the sink.
	Latency{ event: EventModel },
}

impl Metric
{
	///The five calculators with the specification's present-day defaults.
	pub fn standard_calculators() -> Vec<Metric>
	{
		vec![
			Metric::DegreeVariance,
			Metric::Robustness,
			Metric::ChannelQuality{event: EventModel::default(), noise: DEFAULT_NOISE},
			Metric::DataAggregation{event: EventModel::default()},
			Metric::Latency{event: EventModel::default()},
		]
	}

	///A file-safe slug, used as a table filename.
	pub fn name(&self) -> &'static str
	{
		match self
		{
			Metric::DegreeVariance => "degree-variance",
			Metric::Robustness => "robustness",
			Metric::ChannelQuality{..} => "channel-quality",
			Metric::DataAggregation{..} => "data-aggregation",
			Metric::Latency{..} => "latency",
		}
	}

	///Evaluate this calculator over a built network. `0.0` is the
	///specification's "no sample" sentinel for the three event-driven
	///metrics when no sensor is triggered; callers averaging across trials
	///must treat it as "exclude from the mean", not as a real zero.
	pub fn evaluate(&self, network: &Network) -> f64
	{
		match self
		{
			Metric::DegreeVariance => degree_variance::degree_variance(network),
			Metric::Robustness => robustness::robustness(network),
			Metric::ChannelQuality{event, noise} => channel_quality::channel_quality(network, event.position, event.sensing_range, *noise),
			Metric::DataAggregation{event} => aggregation::data_aggregation(network, event.position, event.sensing_range),
			Metric::Latency{event} => latency::latency(network, event.position, event.sensing_range),
		}
	}

	///Whether `value` is the "no triggered sensor" sentinel for this
	///calculator. Always `false` for the two tree-structural metrics, which
	///have no such degeneracy.
	pub fn is_no_sample(&self, value: f64) -> bool
	{
		match self
		{
			Metric::DegreeVariance | Metric::Robustness => false,
			Metric::ChannelQuality{..} | Metric::DataAggregation{..} | Metric::Latency{..} => value == 0.0,
		}
	}
}
