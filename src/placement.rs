/*!

Random sensor placement (ambient collaborator, §10.D): draws candidate
deployments and retries until one is channel-connectable at the requested
range.

*/

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::geometry::{Position, Region};
use crate::mst::minimum_communication_range;

///Sensor `0` at the region's center, the remaining `num_sensors - 1`
///uniformly at random inside the region.
pub fn random_positions(num_sensors: usize, region: &Region, rng: &mut StdRng) -> Vec<Position>
{
	let mut positions = Vec::with_capacity(num_sensors);
	positions.push(region.center());
	for _ in 1..num_sensors
	{
		let x = rng.gen_range(region.min_x..=region.max_x);
		let y = rng.gen_range(region.min_y..=region.max_y);
		positions.push(Position::new(x, y));
	}
	positions
}

///Retries [`random_positions`] up to `max_attempts` times, accepting the
///first draw whose minimum connecting range (§4.G) does not exceed `range`.
pub fn place_connected(num_sensors: usize, region: &Region, range: f64, rng: &mut StdRng, max_attempts: usize) -> Result<Vec<Position>>
{
	for _ in 0..max_attempts
	{
		let positions = random_positions(num_sensors, region, rng);
		if minimum_communication_range(&positions) <= range
		{
			return Ok(positions);
		}
	}
	Err(Error::Placement{num_sensors, range, attempts: max_attempts})
}

#[cfg(test)]
mod tests
{
	use super::*;
	use rand::SeedableRng;

	#[test]
	fn sensor_zero_is_always_at_the_region_center()
	{
		let region = Region::centered_square(50.0);
		let mut rng = StdRng::seed_from_u64(7);
		let positions = random_positions(10, &region, &mut rng);
		assert_eq!(positions[0], region.center());
		assert_eq!(positions.len(), 10);
	}

	#[test]
	fn every_drawn_position_lies_inside_the_region()
	{
		let region = Region::centered_square(25.0);
		let mut rng = StdRng::seed_from_u64(3);
		let positions = random_positions(50, &region, &mut rng);
		for p in &positions
		{
			assert!(region.contains(p));
		}
	}

	#[test]
	fn place_connected_succeeds_with_a_generous_range()
	{
		let region = Region::centered_square(10.0);
		let mut rng = StdRng::seed_from_u64(11);
		let positions = place_connected(20, &region, 1000.0, &mut rng, 10).expect("a huge range always connects");
		assert_eq!(positions.len(), 20);
	}

	#[test]
	fn place_connected_fails_when_the_range_is_hopeless()
	{
		let region = Region::centered_square(1000.0);
		let mut rng = StdRng::seed_from_u64(11);
		let result = place_connected(50, &region, 0.001, &mut rng, 3);
		assert!(matches!(result, Err(Error::Placement{attempts: 3, ..})));
	}
}
