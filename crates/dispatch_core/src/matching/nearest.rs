use std::cmp::Ordering;

use crate::geometry::Point;
use crate::vehicle::Vehicle;

use super::algorithm::MatchingAlgorithm;
use super::types::MatchCandidate;

/// Nearest-vehicle matching by straight-line distance.
///
/// A candidate replaces the current best only when it is strictly closer, so
/// equidistant vehicles resolve to the one seen first (earliest registered).
/// Distances are compared with `f64::total_cmp`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestMatching;

impl MatchingAlgorithm for NearestMatching {
    fn select(&self, pickup: Point, candidates: &[Vehicle]) -> Option<MatchCandidate> {
        let mut best_match: Option<MatchCandidate> = None;

        for vehicle in candidates {
            let distance = pickup.distance_to(vehicle.position);
            let closer = match &best_match {
                None => true,
                Some(best) => distance.total_cmp(&best.pickup_distance) == Ordering::Less,
            };
            if closer {
                best_match = Some(MatchCandidate {
                    vehicle_id: vehicle.id,
                    pickup_distance: distance,
                });
            }
        }

        best_match
    }
}

/// First-come-first-served matching: the earliest registered eligible vehicle,
/// regardless of distance. Useful as a baseline for comparisons.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailableMatching;

impl MatchingAlgorithm for FirstAvailableMatching {
    fn select(&self, pickup: Point, candidates: &[Vehicle]) -> Option<MatchCandidate> {
        candidates.first().map(|vehicle| MatchCandidate {
            vehicle_id: vehicle.id,
            pickup_distance: pickup.distance_to(vehicle.position),
        })
    }
}
