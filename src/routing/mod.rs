/*!

Component C (BFS parent-candidate generator) and component E (the routing
builder that composes it with a [`selectors::ParentSelector`]).

*/

pub mod selectors;

use std::collections::VecDeque;

use rand::rngs::StdRng;

pub use self::selectors::ParentSelector;
use crate::network::Network;

///For each sensor, the ordered list of neighbors one BFS level shallower
///than it — its eligible parents. Index `0` (the sink) always has an empty
///list; it is never read since the sink never gets a parent.
pub type Candidates = Vec<Vec<usize>>;

///Run BFS from the sink, writing `level(i)` into `network` for every
///reachable sensor and collecting, for each sensor, the ordered candidate
///list described in the specification. Returns `None` if the channel graph
///does not reach every sensor (the network is not channel-connected); the
///routing builder turns that into a failed build.
pub fn bfs_candidates(network: &mut Network) -> Option<Candidates>
{
	let n = network.num_sensors();
	let mut candidates: Candidates = vec![Vec::new(); n];
	let mut levels: Vec<Option<usize>> = vec![None; n];
	let mut enqueued = vec![false; n];

	levels[0] = Some(0);
	enqueued[0] = true;
	let mut queue = VecDeque::new();
	queue.push_back(0);
	let mut num_visited = 1;

	while let Some(u) = queue.pop_front()
	{
		let level_u = levels[u].expect("a dequeued sensor always has a level");
		for v in network.get_neighbors(u)
		{
			match levels[v]
			{
				None =>
				{
					levels[v] = Some(level_u + 1);
					candidates[v].push(u);
					if !enqueued[v]
					{
						enqueued[v] = true;
						num_visited += 1;
						queue.push_back(v);
					}
				}
				Some(level_v) if level_v > level_u =>
				{
					debug_assert_eq!(level_v, level_u + 1, "BFS invariant: a shallower neighbor is exactly one level up");
					candidates[v].push(u);
				}
				_ =>
				{
					//v is at the same level or shallower: not a valid parent candidate.
				}
			}
		}
	}

	if num_visited != n
	{
		return None;
	}
	for i in 0..n
	{
		network.set_level(i, levels[i].expect("every sensor was visited"));
	}
	Some(candidates)
}

///Realizes a spanning tree rooted at the sink by composing the BFS
///candidate generator with a [`ParentSelector`]. Carries a file-safe `name`
///and a display `title`, both surfaced to the SVG and table collaborators.
#[derive(Debug)]
pub struct RoutingBuilder
{
	pub name: String,
	pub title: String,
	pub selector: ParentSelector,
}

impl RoutingBuilder
{
	pub fn new(name: impl Into<String>, title: impl Into<String>, selector: ParentSelector) -> RoutingBuilder
	{
		RoutingBuilder{name: name.into(), title: title.into(), selector}
	}

	///The eight builders named in the specification, in the order they are
	///listed there.
	pub fn standard_builders() -> Vec<RoutingBuilder>
	{
		use ParentSelector::*;
		vec![
			RoutingBuilder::new("earliest-first", "Earliest First", EarliestFirst),
			RoutingBuilder::new("second-earliest-first", "Second Earliest First", SecondEarliestFirst),
			RoutingBuilder::new("latest-first", "Latest First", LatestFirst),
			RoutingBuilder::new("nearest-first", "Nearest First", NearestFirst),
			RoutingBuilder::new("second-nearest-first", "Second Nearest First", SecondNearestFirst),
			RoutingBuilder::new("farthest-first", "Farthest First", FarthestFirst),
			RoutingBuilder::new("randomized", "Randomized", Randomized),
			RoutingBuilder::new("weighted-randomized", "Weighted Randomized", WeightedRandomized),
		]
	}

	///Build a spanning tree rooted at the sink over `network`. Returns
	///`false` if the channel graph is not connected, in which case no
	///routing state is written beyond the reset performed by
	///`remove_parents`. Panics if a selector returns something outside the
	///candidate list it was given, or if the resulting routing fails the
	///post-build connectivity check — both are invariant violations, not
	///recoverable errors (see the specification's error-handling design).
	pub fn build(&self, network: &mut Network, rng: &mut StdRng) -> bool
	{
		network.remove_parents();
		let candidates = match bfs_candidates(network)
		{
			Some(c) => c,
			None => return false,
		};
		let n = network.num_sensors();
		for i in 1..n
		{
			assert!(!candidates[i].is_empty(), "sensor {} has no candidate parent after a successful BFS", i);
			let parent = self.selector.select(i, &candidates[i], network, rng);
			assert!(candidates[i].contains(&parent), "selector returned a sensor outside its candidate list");
			network.set_parent(i, parent);
		}
		assert!(network.is_connected_with_routings(), "routing failed the connectivity check after build");
		true
	}
}
