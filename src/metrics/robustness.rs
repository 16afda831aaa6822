/*!

Single-failure robustness: pretend the most-used non-sink sensor fails, and
measure how much of the tree stays connected to the sink.

*/

use crate::network::Network;

///Subtree size of every sensor (including itself) — the "usage" from the
///specification's glossary — computed by walking every sensor's chain up to
///the sink and incrementing a counter at each node visited.
fn usage(network: &Network) -> Vec<usize>
{
	let n = network.num_sensors();
	let mut usage = vec![0usize; n];
	for start in 0..n
	{
		let mut cur = start;
		loop
		{
			usage[cur] += 1;
			if cur == 0
			{
				break;
			}
			cur = network.get_parent(cur).expect("network must be routed before computing metrics");
		}
	}
	usage
}

///Fraction of non-sink sensors still connected to the sink after the
///most-used non-sink sensor is made to fail. `0` if `n < 3`.
pub fn robustness(network: &Network) -> f64
{
	let n = network.num_sensors();
	if n < 3
	{
		return 0.0;
	}
	let usage = usage(network);
	let failed = (1..n).max_by_key(|&v| usage[v]).expect("n >= 3 so there is at least one non-sink sensor");

	let mut status: Vec<Option<bool>> = vec![None; n];
	status[0] = Some(true);
	status[failed] = Some(false);

	for v in 1..n
	{
		if status[v].is_some()
		{
			continue;
		}
		let mut path = Vec::new();
		let mut cur = v;
		let outcome = loop
		{
			if let Some(s) = status[cur]
			{
				break s;
			}
			path.push(cur);
			cur = network.get_parent(cur).expect("network must be routed before computing metrics");
		};
		for node in path
		{
			status[node] = Some(outcome);
		}
	}

	let connected = (1..n).filter(|&v| status[v] == Some(true)).count();
	connected as f64 / (n - 1) as f64
}
