use bevy_ecs::prelude::{Commands, Entity, Query, Res, With};

use crate::ecs::{Assigned, Pending, RideRequest};
use crate::error::DispatchError;
use crate::matching::RequestMatcher;

/// Try to bind every pending request, oldest request id first.
///
/// Requests that find no vehicle stay pending and are retried on the next tick.
pub fn matching_system(
    mut commands: Commands,
    matcher: Res<RequestMatcher>,
    mut requests: Query<(Entity, &mut RideRequest), With<Pending>>,
) {
    // Query order follows archetype layout; sort so earlier requests get first pick.
    let mut pending: Vec<_> = requests.iter_mut().collect();
    pending.sort_by_key(|(_, ride)| ride.0.id());

    for (entity, mut ride) in pending {
        match matcher.match_request(&mut ride.0) {
            Ok(vehicle) => {
                commands
                    .entity(entity)
                    .remove::<Pending>()
                    .insert(Assigned(vehicle));
            }
            Err(DispatchError::NoVehicleAvailable(_)) => {}
            Err(DispatchError::AlreadyBound { vehicle, .. }) => {
                commands
                    .entity(entity)
                    .remove::<Pending>()
                    .insert(Assigned(vehicle));
            }
            Err(err) => {
                log::warn!("matching request {} failed: {}", ride.0.id(), err);
            }
        }
    }
}
