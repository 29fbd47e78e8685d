use bevy_ecs::prelude::{Commands, Entity, Query, Res, With};

use crate::ecs::{Assigned, AwaitingDestination, Completed, Pending, RideRequest};
use crate::error::DispatchError;
use crate::lifecycle::{ArrivalOutcome, AssignmentLifecycle};

/// Poll every assigned request for arrival and complete the ones whose vehicle
/// stands on the destination.
pub fn arrival_system(
    mut commands: Commands,
    lifecycle: Res<AssignmentLifecycle>,
    mut requests: Query<(Entity, &mut RideRequest, Option<&AwaitingDestination>), With<Assigned>>,
) {
    for (entity, mut ride, awaiting) in requests.iter_mut() {
        match lifecycle.check_arrival(&mut ride.0) {
            Ok(ArrivalOutcome::Released(vehicle)) => {
                commands
                    .entity(entity)
                    .remove::<(Assigned, AwaitingDestination)>()
                    .insert(Completed { vehicle });
            }
            Ok(ArrivalOutcome::InProgress) => {
                if awaiting.is_some() {
                    commands.entity(entity).remove::<AwaitingDestination>();
                }
            }
            Ok(ArrivalOutcome::Unassigned) => {
                log::warn!(
                    "request {} was marked assigned without a vehicle, requeueing",
                    ride.0.id()
                );
                commands
                    .entity(entity)
                    .remove::<(Assigned, AwaitingDestination)>()
                    .insert(Pending);
            }
            Err(DispatchError::MissingDestination(_)) => {
                if awaiting.is_none() {
                    log::debug!("request {} needs a destination", ride.0.id());
                    commands.entity(entity).insert(AwaitingDestination);
                }
            }
            Err(err) => {
                log::warn!("arrival check for request {} failed: {}", ride.0.id(), err);
            }
        }
    }
}
