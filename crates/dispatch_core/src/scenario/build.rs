use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::geometry::Point;
use crate::registry::VehicleRegistry;
use crate::request::{Request, RequestId, TierRequirement};
use crate::scenario::params::ScenarioParams;
use crate::vehicle::{Tier, Vehicle, VehicleId};

/// Offset applied to the seed for the request stream, so fleet and requests
/// draw from independent sequences.
const REQUEST_SEED_OFFSET: u64 = 0x9e37_79b9_7f4a_7c15;

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn sample_axis<R: Rng>(rng: &mut R, extent: f64, integer: bool) -> f64 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    let value = rng.gen_range(0.0..extent);
    if integer {
        value.floor()
    } else {
        value
    }
}

/// Probability for `gen_bool`: clamped to [0, 1], with NaN and infinities read as 0.
fn share(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn random_point<R: Rng>(rng: &mut R, params: &ScenarioParams) -> Point {
    Point::new(
        sample_axis(rng, params.width, params.integer_coordinates),
        sample_axis(rng, params.height, params.integer_coordinates),
    )
}

fn random_tier<R: Rng>(rng: &mut R, params: &ScenarioParams) -> Tier {
    let roll: f64 = rng.gen();
    if roll < params.premium_share {
        Tier::Premium
    } else if roll < params.premium_share + params.comfort_share {
        Tier::Comfort
    } else {
        Tier::Standard
    }
}

/// Build a registry with `num_vehicles` vehicles, ids `1..=num_vehicles` in
/// registration order.
pub fn build_registry(params: &ScenarioParams) -> Result<VehicleRegistry> {
    let mut rng = rng_for(params.seed);
    let out_of_service = share(params.out_of_service_share);
    let registry = VehicleRegistry::new();

    for n in 1..=params.num_vehicles {
        let position = random_point(&mut rng, params);
        let tier = random_tier(&mut rng, params);
        let mut vehicle = Vehicle::new(VehicleId(n as u32), position, tier);
        if rng.gen_bool(out_of_service) {
            vehicle = vehicle.unavailable();
        }
        registry.register_vehicle(vehicle)?;
    }

    log::info!(
        "built scenario fleet: {} vehicles on {}x{} (seed {:?})",
        registry.len(),
        params.width,
        params.height,
        params.seed
    );
    Ok(registry)
}

/// Generate `count` requests with ids `1..=count`, each with a destination.
pub fn random_requests(params: &ScenarioParams, count: usize) -> Vec<Request> {
    let mut rng = rng_for(params.seed.map(|seed| seed ^ REQUEST_SEED_OFFSET));
    let special = share(params.special_request_share);

    (1..=count)
        .map(|n| {
            let pickup = random_point(&mut rng, params);
            let destination = random_point(&mut rng, params);
            let requirement = if rng.gen_bool(special) {
                TierRequirement::Special
            } else {
                TierRequirement::Any
            };
            Request::new(RequestId(n as u64), pickup, requirement).with_destination(destination)
        })
        .collect()
}
