use bevy_ecs::prelude::Component;

use crate::request::Request;
use crate::vehicle::VehicleId;

/// A rider request living in the ECS world. Its state is tracked with the marker
/// components below; exactly one of `Pending`, `Assigned`, `Completed` is present.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct RideRequest(pub Request);

/// Waiting for a vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct Pending;

/// Bound to a vehicle; the trip is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Assigned(pub VehicleId);

/// The vehicle reached the destination and was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Completed {
    pub vehicle: VehicleId,
}

/// Assigned, but the rider still has to provide a destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct AwaitingDestination;
