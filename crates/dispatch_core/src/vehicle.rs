use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Service class of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Standard,
    Comfort,
    Premium,
}

/// Restricts a pool query to one tier, or admits every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierFilter {
    #[default]
    Any,
    Only(Tier),
}

impl TierFilter {
    pub fn admits(&self, tier: Tier) -> bool {
        match self {
            TierFilter::Any => true,
            TierFilter::Only(wanted) => *wanted == tier,
        }
    }
}

/// Point-in-time view of a registered vehicle.
///
/// The registry owns the live state; snapshots are detached copies and go
/// stale as soon as another caller moves, reserves or releases the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub position: Point,
    pub tier: Tier,
    pub available: bool,
}

impl Vehicle {
    pub fn new(id: VehicleId, position: Point, tier: Tier) -> Self {
        Self {
            id,
            position,
            tier,
            available: true,
        }
    }

    /// Same vehicle, registered as already out of the available pool.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}
