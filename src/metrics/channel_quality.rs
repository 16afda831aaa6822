/*!

Channel quality: mean link error rate, under a bit-accuracy propagation
model, from an event to every sensor it triggers.

*/

use crate::geometry::Position;
use crate::network::Network;

///Per-hop bit accuracy rate at distance `d` given a communication range `r`
///and a noise floor: `1 - 0.5 * erfc(sqrt(1 / ((d/r)^4 * noise)))`.
pub fn bit_accuracy_rate(d: f64, r: f64, noise: f64) -> f64
{
	let ratio = d / r;
	let argument = (1.0 / (ratio.powi(4) * noise)).sqrt();
	1.0 - 0.5 * libm::erfc(argument)
}

///Mean, over sensors triggered by an event at `event` within `sensing_range`,
///of `1 - LAR`, where `LAR` is the product of the bit-accuracy rates of
///every hop from the event to the sink through the sensor's parent chain.
///`0.0` if no sensor is triggered.
pub fn channel_quality(network: &Network, event: Position, sensing_range: f64, noise: f64) -> f64
{
	let triggered = network.find_sensors_within_range(event, sensing_range);
	if triggered.is_empty()
	{
		return 0.0;
	}
	let r = network.communication_range();
	let total_error: f64 = triggered.iter().map(|&sensor|
	{
		let mut lar = 1.0;
		let mut prev = event;
		let mut cur = sensor;
		loop
		{
			let cur_pos = network.get_position(cur);
			lar *= bit_accuracy_rate(prev.distance(&cur_pos), r, noise);
			if cur == 0
			{
				break;
			}
			prev = cur_pos;
			cur = network.get_parent(cur).expect("network must be routed before computing metrics");
		}
		1.0 - lar
	}).sum();
	total_error / triggered.len() as f64
}
