/*!

Latency: parallel broadcast time from triggered sensors to the sink, peeling
the active subtree leaf-first.

*/

use std::collections::VecDeque;

use crate::geometry::Position;
use crate::network::Network;

///`0.0` if no sensor is triggered. Otherwise: mark every sensor on any
///triggered-to-sink path as active, then repeatedly peel active sensors
///whose active children have all reported, each peel setting
///`t[parent] = max(t[parent], t[self] + 1)`. Returns `t[sink]`.
pub fn latency(network: &Network, event: Position, sensing_range: f64) -> f64
{
	let triggered = network.find_sensors_within_range(event, sensing_range);
	if triggered.is_empty()
	{
		return 0.0;
	}
	let n = network.num_sensors();
	let mut active = vec![false; n];
	for &sensor in &triggered
	{
		let mut cur = sensor;
		loop
		{
			if active[cur]
			{
				break;
			}
			active[cur] = true;
			if cur == 0
			{
				break;
			}
			cur = network.get_parent(cur).expect("network must be routed before computing metrics");
		}
	}

	let mut remaining_children = vec![0usize; n];
	for v in 1..n
	{
		if active[v]
		{
			let parent = network.get_parent(v).expect("network must be routed before computing metrics");
			remaining_children[parent] += 1;
		}
	}

	let mut time = vec![0u64; n];
	let mut queue: VecDeque<usize> = (1..n).filter(|&v| active[v] && remaining_children[v] == 0).collect();
	while let Some(v) = queue.pop_front()
	{
		let parent = network.get_parent(v).expect("network must be routed before computing metrics");
		time[parent] = time[parent].max(time[v] + 1);
		remaining_children[parent] -= 1;
		if parent != 0 && remaining_children[parent] == 0
		{
			queue.push_back(parent);
		}
	}
	time[0] as f64
}
