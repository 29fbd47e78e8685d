use crate::geometry::Point;
use crate::vehicle::Vehicle;

use super::types::MatchCandidate;

/// Trait for algorithms that pick one vehicle out of an eligible pool.
///
/// Candidates arrive already filtered (available, tier-eligible) and in
/// registration order. Implementations must be deterministic for a given
/// pickup and candidate slice; the matcher relies on that when it retries
/// after losing a commit race.
///
/// # Examples
///
/// ```rust
/// use dispatch_core::geometry::Point;
/// use dispatch_core::matching::{MatchingAlgorithm, NearestMatching};
/// use dispatch_core::vehicle::{Tier, Vehicle, VehicleId};
///
/// let candidates = [
///     Vehicle::new(VehicleId(1), Point::new(20.0, 0.0), Tier::Standard),
///     Vehicle::new(VehicleId(2), Point::new(0.0, 10.0), Tier::Comfort),
/// ];
/// let picked = NearestMatching.select(Point::new(0.0, 0.0), &candidates);
/// assert_eq!(picked.map(|c| c.vehicle_id), Some(VehicleId(2)));
/// ```
pub trait MatchingAlgorithm: Send + Sync {
    /// Pick a vehicle for a rider waiting at `pickup`.
    ///
    /// Returns `None` only when `candidates` is empty.
    fn select(&self, pickup: Point, candidates: &[Vehicle]) -> Option<MatchCandidate>;
}
