/*!

The network model (component B of the design): a dense, index-keyed vector
of sensors, the symmetric channel graph derived from a range query over
them, the pairwise distance matrix, and the per-sensor routing state
(`level`, `parent`) that the routing builder writes into.

Sensor `0` is always the base station / sink: it never has a parent and its
level is always `0`.

*/

use std::collections::{BTreeSet, VecDeque};

use crate::geometry::Position;
use crate::matrix::Matrix;

///An axis-ordered multimap from a coordinate to the sensor indices that sit
///at it. Backed by a sorted vector rather than a tree so that duplicate
///coordinates (two sensors at the same `x`, say) are handled for free:
///several entries simply share a key.
#[derive(Default)]
struct AxisIndex
{
	///`(coordinate, sensor_index)`, sorted by coordinate.
	entries: Vec<(f64, usize)>,
}

impl AxisIndex
{
	fn clear(&mut self)
	{
		self.entries.clear();
	}
	fn insert(&mut self, coordinate: f64, sensor: usize)
	{
		self.entries.push((coordinate, sensor));
	}
	///Call once after all `insert`s for a deployment; keeps `range` a binary search.
	fn finish(&mut self)
	{
		self.entries.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("coordinates are never NaN"));
	}
	///Sensor indices whose coordinate lies in `[lo, hi]`.
	fn range(&self, lo: f64, hi: f64) -> Vec<usize>
	{
		let start = self.entries.partition_point(|&(c, _)| c < lo);
		let mut result = Vec::new();
		for &(c, sensor) in &self.entries[start..]
		{
			if c > hi
			{
				break;
			}
			result.push(sensor);
		}
		result
	}
}

///A single sensor: its fixed position, its channel neighbors, and the
///routing state (`level`, `parent`) written by a routing builder.
#[derive(Clone, Debug)]
pub struct Sensor
{
	position: Position,
	///Ordered set of neighbor indices; iteration order matters for BFS candidate order (see [`crate::routing`]).
	neighbors: BTreeSet<usize>,
	level: Option<usize>,
	parent: Option<usize>,
}

impl Sensor
{
	fn new(position: Position) -> Sensor
	{
		Sensor{position, neighbors: BTreeSet::new(), level: None, parent: None}
	}
}

///Owns the sensors, the channel graph, the distance matrix and the routing
///state. See the module documentation for the sink convention.
pub struct Network
{
	sensors: Vec<Sensor>,
	x_index: AxisIndex,
	y_index: AxisIndex,
	distances: Matrix<f64>,
	communication_range: f64,
}

impl Network
{
	pub fn new() -> Network
	{
		Network{
			sensors: Vec::new(),
			x_index: AxisIndex::default(),
			y_index: AxisIndex::default(),
			distances: Matrix::constant(0.0, 0, 0),
			communication_range: 0.0,
		}
	}

	///Replace all state: sensor `0` of `positions` becomes the sink. Returns
	///whether the resulting channel graph is connected (BFS from the sink
	///reaches every sensor).
	pub fn deploy(&mut self, positions: &[Position], communication_range: f64) -> bool
	{
		let n = positions.len();
		self.sensors = positions.iter().map(|&p| Sensor::new(p)).collect();
		self.communication_range = communication_range;

		self.x_index.clear();
		self.y_index.clear();
		for (i, p) in positions.iter().enumerate()
		{
			self.x_index.insert(p.x, i);
			self.y_index.insert(p.y, i);
		}
		self.x_index.finish();
		self.y_index.finish();

		self.distances = Matrix::constant(0.0, n, n);
		for i in 0..n
		{
			for j in (i + 1)..n
			{
				let d = positions[i].distance(&positions[j]);
				self.distances.set_symmetric(i, j, d);
			}
		}

		for i in 0..n
		{
			let in_range = self.find_sensors_within_range(positions[i], communication_range);
			for j in in_range
			{
				if j != i
				{
					self.sensors[i].neighbors.insert(j);
				}
			}
		}

		self.is_connected_with_channels()
	}

	///Sensors within `r` of `center`, in ascending index order. Does not
	///exclude any particular sensor; callers wanting "neighbors of `i`
	///excluding `i`" must filter the result themselves.
	pub fn find_sensors_within_range(&self, center: Position, r: f64) -> Vec<usize>
	{
		let x_hits = self.x_index.range(center.x - r, center.x + r);
		let y_hits: BTreeSet<usize> = self.y_index.range(center.y - r, center.y + r).into_iter().collect();
		let mut result: Vec<usize> = x_hits.into_iter()
			.filter(|i| y_hits.contains(i))
			.filter(|&i| center.distance(&self.sensors[i].position) <= r)
			.collect();
		result.sort_unstable();
		result
	}

	pub fn num_sensors(&self) -> usize
	{
		self.sensors.len()
	}

	pub fn communication_range(&self) -> f64
	{
		self.communication_range
	}

	pub fn get_position(&self, i: usize) -> Position
	{
		self.sensors[i].position
	}

	pub fn get_distance(&self, i: usize, j: usize) -> f64
	{
		*self.distances.get(i, j)
	}

	///Neighbors of `i` in ascending index order. A plain hash set would not
	///do: the BFS candidate order in [`crate::routing`] depends on this
	///being deterministic.
	pub fn get_neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_
	{
		self.sensors[i].neighbors.iter().copied()
	}

	pub fn get_level(&self, i: usize) -> Option<usize>
	{
		self.sensors[i].level
	}

	pub fn set_level(&mut self, i: usize, level: usize)
	{
		self.sensors[i].level = Some(level);
	}

	pub fn get_parent(&self, i: usize) -> Option<usize>
	{
		self.sensors[i].parent
	}

	pub fn set_parent(&mut self, i: usize, parent: usize)
	{
		self.sensors[i].parent = Some(parent);
	}

	///Reset all routing state: every parent to "none", every level to
	///"unset" except the sink, which is always at level `0`.
	pub fn remove_parents(&mut self)
	{
		for (i, sensor) in self.sensors.iter_mut().enumerate()
		{
			sensor.parent = None;
			sensor.level = if i == 0 { Some(0) } else { None };
		}
	}

	///BFS from sensor `0` over the undirected channel graph.
	pub fn is_connected_with_channels(&self) -> bool
	{
		let n = self.num_sensors();
		if n == 0
		{
			return true;
		}
		let mut visited = vec![false; n];
		visited[0] = true;
		let mut queue = VecDeque::new();
		queue.push_back(0);
		let mut num_visited = 1;
		while let Some(u) = queue.pop_front()
		{
			for v in self.get_neighbors(u)
			{
				if !visited[v]
				{
					visited[v] = true;
					num_visited += 1;
					queue.push_back(v);
				}
			}
		}
		num_visited == n
	}

	///`true` iff every sensor reaches sensor `0` by following `parent`
	///without ever encountering "none" first.
	pub fn is_connected_with_routings(&self) -> bool
	{
		let n = self.num_sensors();
		for start in 0..n
		{
			let mut cur = start;
			let mut steps = 0;
			while cur != 0
			{
				match self.get_parent(cur)
				{
					Some(p) => cur = p,
					None => return false,
				}
				steps += 1;
				if steps > n
				{
					return false;
				}
			}
		}
		true
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	fn line_positions() -> Vec<Position>
	{
		(0..5).map(|i| Position::new(i as f64, 0.0)).collect()
	}

	#[test]
	fn deploy_connects_a_line_network()
	{
		let mut net = Network::new();
		assert!(net.deploy(&line_positions(), 1.5));
		assert_eq!(net.num_sensors(), 5);
		assert_eq!(net.get_neighbors(2).collect::<Vec<_>>(), vec![1, 3]);
	}

	#[test]
	fn deploy_reports_disconnection_at_too_small_a_range()
	{
		let mut net = Network::new();
		assert!(!net.deploy(&line_positions(), 0.5));
	}

	#[test]
	fn distance_matrix_is_symmetric_with_zero_diagonal()
	{
		let mut net = Network::new();
		net.deploy(&line_positions(), 1.5);
		for i in 0..5
		{
			assert_eq!(net.get_distance(i, i), 0.0);
			for j in 0..5
			{
				assert_eq!(net.get_distance(i, j), net.get_distance(j, i));
			}
		}
	}

	#[test]
	fn neighbor_relation_is_symmetric()
	{
		let mut net = Network::new();
		net.deploy(&line_positions(), 1.5);
		for i in 0..5
		{
			for j in net.get_neighbors(i)
			{
				assert!(net.get_neighbors(j).any(|k| k == i), "{} is a neighbor of {} but not vice versa", i, j);
			}
		}
	}

	#[test]
	fn remove_parents_resets_routing_state_but_keeps_the_sink_at_level_zero()
	{
		let mut net = Network::new();
		net.deploy(&line_positions(), 1.5);
		net.set_parent(1, 0);
		net.set_level(1, 1);
		net.remove_parents();
		assert_eq!(net.get_level(0), Some(0));
		assert_eq!(net.get_parent(0), None);
		assert_eq!(net.get_level(1), None);
		assert_eq!(net.get_parent(1), None);
	}

	#[test]
	fn find_sensors_within_range_handles_duplicate_coordinates()
	{
		let mut net = Network::new();
		let positions = vec![
			Position::new(0.0, 0.0),
			Position::new(1.0, 0.0),
			Position::new(1.0, 1.0),
		];
		net.deploy(&positions, 5.0);
		let hits = net.find_sensors_within_range(Position::new(1.0, 0.5), 0.6);
		assert_eq!(hits, vec![1, 2]);
	}

	#[test]
	fn is_connected_with_routings_detects_a_missing_parent()
	{
		let mut net = Network::new();
		net.deploy(&line_positions(), 1.5);
		net.remove_parents();
		net.set_parent(1, 0);
		net.set_parent(2, 1);
		// sensors 3 and 4 never get a parent
		assert!(!net.is_connected_with_routings());
	}
}
