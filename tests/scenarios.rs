use rand::rngs::StdRng;
use rand::SeedableRng;

use sensorpaths::geometry::{Position, Region};
use sensorpaths::metrics::Metric;
use sensorpaths::mst::minimum_communication_range;
use sensorpaths::network::Network;
use sensorpaths::placement::place_connected;
use sensorpaths::routing::{ParentSelector, RoutingBuilder};

///Scenario 1: a five-sensor line, range 1.5. BFS levels are 0..4 and every
///selector has exactly one candidate per sensor.
#[test]
fn scenario_1_line_network()
{
	let positions: Vec<Position> = (0..5).map(|i| Position::new(i as f64, 0.0)).collect();
	for builder in RoutingBuilder::standard_builders()
	{
		let mut net = Network::new();
		assert!(net.deploy(&positions, 1.5));
		let mut rng = StdRng::seed_from_u64(1);
		assert!(builder.build(&mut net, &mut rng));
		assert_eq!(net.get_level(0), Some(0));
		for i in 1..5
		{
			assert_eq!(net.get_level(i), Some(i));
			assert_eq!(net.get_parent(i), Some(i - 1));
		}
	}
}

///Scenario 2: a four-leaf star. Every leaf's sole candidate is the sink, and
///the resulting degree variance matches the worked example (2.56).
#[test]
fn scenario_2_star_network_degree_variance()
{
	let positions = vec![
		Position::new(0.0, 0.0),
		Position::new(1.0, 0.0),
		Position::new(-1.0, 0.0),
		Position::new(0.0, 1.0),
		Position::new(0.0, -1.0),
	];
	let mut net = Network::new();
	assert!(net.deploy(&positions, 1.5));
	let builder = RoutingBuilder::new("earliest-first", "Earliest First", ParentSelector::EarliestFirst);
	let mut rng = StdRng::seed_from_u64(1);
	assert!(builder.build(&mut net, &mut rng));
	for leaf in 1..5
	{
		assert_eq!(net.get_parent(leaf), Some(0));
	}
	approx::assert_relative_eq!(Metric::DegreeVariance.evaluate(&net), 2.56, epsilon = 1e-9);
}

///Scenario 3: a ring where the diagonal sensor has two BFS candidates;
///earliest-first and latest-first disagree on which one it picks.
#[test]
fn scenario_3_ring_network_selector_divergence()
{
	let positions = vec![
		Position::new(0.0, 0.0),
		Position::new(1.0, 0.0),
		Position::new(1.0, 1.0),
		Position::new(0.0, 1.0),
	];

	let mut net = Network::new();
	assert!(net.deploy(&positions, 1.5));
	assert_eq!(net.get_level(0), Some(0));
	let earliest = RoutingBuilder::new("earliest-first", "Earliest First", ParentSelector::EarliestFirst);
	let mut rng = StdRng::seed_from_u64(1);
	assert!(earliest.build(&mut net, &mut rng));
	assert_eq!(net.get_level(1), Some(1));
	assert_eq!(net.get_level(3), Some(1));
	assert_eq!(net.get_level(2), Some(2));
	let earliest_parent = net.get_parent(2);

	let latest = RoutingBuilder::new("latest-first", "Latest First", ParentSelector::LatestFirst);
	assert!(latest.build(&mut net, &mut rng));
	let latest_parent = net.get_parent(2);

	assert_ne!(earliest_parent, latest_parent);
	assert_eq!(earliest_parent, Some(1));
	assert_eq!(latest_parent, Some(3));
}

///Scenario 4: two sensors at half the communication range from an event
///co-located with the sink report near-zero link error.
#[test]
fn scenario_4_channel_quality_smoke()
{
	let r = 20.0;
	let positions = vec![
		Position::new(50.0, 50.0),
		Position::new(50.0 + r / 2.0, 50.0),
		Position::new(50.0, 50.0 + r / 2.0),
	];
	let mut net = Network::new();
	assert!(net.deploy(&positions, r));
	let builder = RoutingBuilder::new("earliest-first", "Earliest First", ParentSelector::EarliestFirst);
	let mut rng = StdRng::seed_from_u64(1);
	assert!(builder.build(&mut net, &mut rng));

	let metric = Metric::ChannelQuality{
		event: sensorpaths::metrics::EventModel{position: Position::new(50.0, 50.0), sensing_range: 15.0},
		noise: sensorpaths::metrics::DEFAULT_NOISE,
	};
	approx::assert_relative_eq!(metric.evaluate(&net), 0.0, epsilon = 1e-6);
}

///Scenario 5: in a five-sensor line with only the farthest sensor triggered,
///broadcast latency is exactly 4 hops.
#[test]
fn scenario_5_latency_chain()
{
	let positions: Vec<Position> = (0..5).map(|i| Position::new(i as f64, 0.0)).collect();
	let mut net = Network::new();
	assert!(net.deploy(&positions, 1.5));
	let builder = RoutingBuilder::new("earliest-first", "Earliest First", ParentSelector::EarliestFirst);
	let mut rng = StdRng::seed_from_u64(1);
	assert!(builder.build(&mut net, &mut rng));

	let metric = Metric::Latency{event: sensorpaths::metrics::EventModel{position: Position::new(4.0, 0.0), sensing_range: 0.0}};
	assert_eq!(metric.evaluate(&net), 4.0);
}

///Scenario 6: removing the star network's most-used leaf still leaves three
///of the four leaves connected — robustness is 0.75.
#[test]
fn scenario_6_robustness_removal()
{
	let positions = vec![
		Position::new(0.0, 0.0),
		Position::new(1.0, 0.0),
		Position::new(-1.0, 0.0),
		Position::new(0.0, 1.0),
		Position::new(0.0, -1.0),
	];
	let mut net = Network::new();
	assert!(net.deploy(&positions, 1.5));
	let builder = RoutingBuilder::new("earliest-first", "Earliest First", ParentSelector::EarliestFirst);
	let mut rng = StdRng::seed_from_u64(1);
	assert!(builder.build(&mut net, &mut rng));
	assert_eq!(Metric::Robustness.evaluate(&net), 0.75);
}

///P8: the MST bottleneck range is always sufficient to channel-connect the
///same positions, across many random deployments.
#[test]
fn p8_mst_range_always_suffices_to_connect()
{
	let region = Region::centered_square(50.0);
	let mut rng = StdRng::seed_from_u64(2024);
	for _ in 0..30
	{
		let positions = place_connected(25, &region, 1000.0, &mut rng, 10).expect("a huge fallback range always connects");
		let r = minimum_communication_range(&positions);
		let mut net = Network::new();
		assert!(net.deploy(&positions, r));
	}
}
