use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::vehicle::VehicleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a rider accepts any vehicle or only the configured special tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierRequirement {
    #[default]
    Any,
    Special,
}

/// A rider's ask for a vehicle.
///
/// The caller owns the request. The bound vehicle is only ever set by
/// [`crate::matching::RequestMatcher`] and cleared by
/// [`crate::lifecycle::AssignmentLifecycle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    id: RequestId,
    pickup: Point,
    destination: Option<Point>,
    tier_requirement: TierRequirement,
    bound_vehicle: Option<VehicleId>,
}

impl Request {
    pub fn new(id: RequestId, pickup: Point, tier_requirement: TierRequirement) -> Self {
        Self {
            id,
            pickup,
            destination: None,
            tier_requirement,
            bound_vehicle: None,
        }
    }

    pub fn with_destination(mut self, destination: Point) -> Self {
        self.destination = Some(destination);
        self
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn pickup(&self) -> Point {
        self.pickup
    }

    pub fn destination(&self) -> Option<Point> {
        self.destination
    }

    /// Set or replace the dropoff point, e.g. after the rider was prompted for it.
    pub fn set_destination(&mut self, destination: Point) {
        self.destination = Some(destination);
    }

    pub fn tier_requirement(&self) -> TierRequirement {
        self.tier_requirement
    }

    pub fn bound_vehicle(&self) -> Option<VehicleId> {
        self.bound_vehicle
    }

    pub fn is_bound(&self) -> bool {
        self.bound_vehicle.is_some()
    }

    pub(crate) fn bind(&mut self, vehicle: VehicleId) {
        debug_assert!(self.bound_vehicle.is_none(), "request already bound");
        self.bound_vehicle = Some(vehicle);
    }

    pub(crate) fn unbind(&mut self) -> Option<VehicleId> {
        self.bound_vehicle.take()
    }
}
