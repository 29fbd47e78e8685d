use crate::vehicle::VehicleId;

/// A vehicle picked by a [`super::MatchingAlgorithm`], with its straight-line pickup distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate {
    pub vehicle_id: VehicleId,
    pub pickup_distance: f64,
}
