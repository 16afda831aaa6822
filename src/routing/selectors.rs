/*!

Component D: the eight parent-selection policies. A selector is a closed,
finite choice, so it is represented as a tagged enum with a single dispatch
method rather than a trait object — there is never going to be a ninth one
plugged in from outside this crate.

*/

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::network::Network;

///One of the eight parent-selection policies from the specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParentSelector
{
	EarliestFirst,
	SecondEarliestFirst,
	LatestFirst,
	NearestFirst,
	SecondNearestFirst,
	FarthestFirst,
	Randomized,
	WeightedRandomized,
}

impl ParentSelector
{
	///Pick one parent for `child` out of its ordered `candidates`
	///(non-empty, ordered as BFS discovered them). `network` is read-only
	///here: selectors inspect positions and neighbor counts but never
	///mutate routing state themselves.
	pub fn select(&self, child: usize, candidates: &[usize], network: &Network, rng: &mut StdRng) -> usize
	{
		assert!(!candidates.is_empty(), "a selector must never be called with an empty candidate list");
		match self
		{
			ParentSelector::EarliestFirst => candidates[0],
			ParentSelector::SecondEarliestFirst => candidates.get(1).copied().unwrap_or(candidates[0]),
			ParentSelector::LatestFirst => candidates[candidates.len() - 1],
			ParentSelector::NearestFirst => nearest(child, candidates, network),
			ParentSelector::SecondNearestFirst => second_nearest(child, candidates, network),
			ParentSelector::FarthestFirst => farthest(child, candidates, network),
			ParentSelector::Randomized => *candidates.choose(rng).expect("candidates is non-empty"),
			ParentSelector::WeightedRandomized => weighted_randomized(candidates, network, rng),
		}
	}
}

fn hop_distance(network: &Network, child: usize, candidate: usize) -> f64
{
	network.get_distance(child, candidate)
}

///First candidate at the smallest distance. `Iterator::min_by` already
///returns the first element on ties, which is the tie-break the
///specification wants.
fn nearest(child: usize, candidates: &[usize], network: &Network) -> usize
{
	*candidates.iter()
		.min_by(|&&a, &&b| hop_distance(network, child, a).partial_cmp(&hop_distance(network, child, b)).expect("distances are never NaN"))
		.expect("candidates is non-empty")
}

///First candidate at the largest distance. Unlike `min_by`, `Iterator::max_by`
///returns the *last* element on ties, so this is done by hand to keep the
///first-wins tie-break consistent with `nearest`.
fn farthest(child: usize, candidates: &[usize], network: &Network) -> usize
{
	let mut best = candidates[0];
	let mut best_distance = hop_distance(network, child, best);
	for &c in &candidates[1..]
	{
		let d = hop_distance(network, child, c);
		if d > best_distance
		{
			best = c;
			best_distance = d;
		}
	}
	best
}

///The candidate with the second-smallest distance; the sole candidate if
///there is only one. Sorts a stable index permutation rather than the
///candidates themselves, so that equal distances keep the BFS discovery
///order the specification documents for ties.
fn second_nearest(child: usize, candidates: &[usize], network: &Network) -> usize
{
	if candidates.len() == 1
	{
		return candidates[0];
	}
	let mut order: Vec<usize> = (0..candidates.len()).collect();
	order.sort_by(|&a, &b| hop_distance(network, child, candidates[a]).partial_cmp(&hop_distance(network, child, candidates[b])).expect("distances are never NaN"));
	candidates[order[1]]
}

///Random candidate, weighted inversely to its own neighbor count in the
///network: peripheral sensors (few neighbors) are preferred.
///
///The original source indexed the neighbor count by the loop index over
///`candidates` rather than by the candidate sensor's own id — almost
///certainly a bug. This implementation uses `|neighbors(candidate)|`, the
///documented semantics.
fn weighted_randomized(candidates: &[usize], network: &Network, rng: &mut StdRng) -> usize
{
	let weights: Vec<f64> = candidates.iter()
		.map(|&c| 1.0 / network.get_neighbors(c).count() as f64)
		.collect();
	let distribution = WeightedIndex::new(&weights).expect("every candidate has at least one neighbor, so every weight is positive");
	candidates[distribution.sample(rng)]
}
