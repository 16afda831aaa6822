/*!

Node-degree variance: how evenly the routing tree spreads its parent
in-degree across sensors.

*/

use crate::network::Network;

///`(1/n) * sum((d[i] - mean)^2)`, where `d[i]` is the number of sensors
///parented at `i` and `mean = (n-1)/n`.
///
///The original source computes `mean` with an integer division, which
///truncates to `0` for any `n > 1` — almost certainly a further bug, since
///the worked example in the specification computes a fractional mean
///(`4/5 = 0.8`). This follows the documented, fractional semantics.
pub fn degree_variance(network: &Network) -> f64
{
	let n = network.num_sensors();
	assert!(n > 0, "degree variance is undefined on an empty network");
	let mut degree = vec![0usize; n];
	for i in 1..n
	{
		let parent = network.get_parent(i).expect("network must be routed before computing metrics");
		degree[parent] += 1;
	}
	let mean = (n - 1) as f64 / n as f64;
	degree.iter().map(|&d| { let diff = d as f64 - mean; diff * diff }).sum::<f64>() / n as f64
}
