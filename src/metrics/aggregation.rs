/*!

Data aggregation: total transmissions needed to get every triggered sensor's
reading to the sink, when intermediate ancestors forward only once.

*/

use crate::geometry::Position;
use crate::network::Network;

///Walk from each triggered sensor toward the sink, counting one
///transmission per newly-visited sensor and stopping as soon as an
///already-visited ancestor is reached. `0.0` if no sensor is triggered.
pub fn data_aggregation(network: &Network, event: Position, sensing_range: f64) -> f64
{
	let triggered = network.find_sensors_within_range(event, sensing_range);
	if triggered.is_empty()
	{
		return 0.0;
	}
	let mut visited = vec![false; network.num_sensors()];
	let mut transmissions = 0usize;
	for &sensor in &triggered
	{
		let mut cur = sensor;
		loop
		{
			if visited[cur]
			{
				break;
			}
			visited[cur] = true;
			transmissions += 1;
			if cur == 0
			{
				break;
			}
			cur = network.get_parent(cur).expect("network must be routed before computing metrics");
		}
	}
	transmissions as f64
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::routing::{ParentSelector, RoutingBuilder};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn a_chain_shares_transmissions_among_triggered_sensors()
	{
		let mut net = Network::new();
		let positions: Vec<Position> = (0..5).map(|i| Position::new(i as f64, 0.0)).collect();
		net.deploy(&positions, 1.5);
		let builder = RoutingBuilder::new("earliest-first", "Earliest First", ParentSelector::EarliestFirst);
		let mut rng = StdRng::seed_from_u64(1);
		assert!(builder.build(&mut net, &mut rng));

		//only sensor 4 triggered: 4,3,2,1,0 all newly visited -> 5 transmissions.
		assert_eq!(data_aggregation(&net, Position::new(4.0, 0.0), 0.0), 5.0);

		//sensors 3 and 4 both triggered: 4 then 3,2,1,0 newly visited; 3 is visited
		//again while walking up from 4's path but contributes no extra transmission.
		assert_eq!(data_aggregation(&net, Position::new(3.5, 0.0), 0.6), 5.0);
	}

	#[test]
	fn no_triggered_sensor_returns_zero()
	{
		let mut net = Network::new();
		let positions = vec![Position::new(0.0, 0.0), Position::new(1.0, 0.0)];
		net.deploy(&positions, 1.5);
		let builder = RoutingBuilder::new("earliest-first", "Earliest First", ParentSelector::EarliestFirst);
		let mut rng = StdRng::seed_from_u64(1);
		builder.build(&mut net, &mut rng);
		assert_eq!(data_aggregation(&net, Position::new(1000.0, 1000.0), 15.0), 0.0);
	}
}
