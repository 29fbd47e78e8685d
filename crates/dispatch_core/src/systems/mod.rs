pub mod arrival;
pub mod matching;

#[cfg(test)]
mod end_to_end_tests {
    use std::sync::Arc;

    use bevy_ecs::prelude::World;

    use crate::config::DispatchConfig;
    use crate::ecs::{Assigned, Completed, Pending, RideRequest};
    use crate::geometry::Point;
    use crate::registry::VehicleRegistry;
    use crate::request::{Request, RequestId, TierRequirement};
    use crate::runner::{dispatch_schedule, install_dispatch, run_ticks_with_hook, spawn_request};
    use crate::vehicle::{Tier, VehicleId};

    #[test]
    fn dispatches_one_ride_end_to_end() {
        let mut world = World::new();
        let registry = Arc::new(VehicleRegistry::new());
        registry
            .register(VehicleId(1), Point::new(0.0, 3.0), Tier::Standard)
            .expect("register");
        install_dispatch(&mut world, Arc::clone(&registry), DispatchConfig::default());

        let destination = Point::new(4.0, 3.0);
        let entity = spawn_request(
            &mut world,
            Request::new(RequestId(1), Point::new(0.0, 0.0), TierRequirement::Any)
                .with_destination(destination),
        );

        let mut schedule = dispatch_schedule();
        // The vehicle drives one unit east per tick once assigned.
        let ticks = run_ticks_with_hook(&mut world, &mut schedule, 20, |world, _tick| {
            if world.get::<Assigned>(entity).is_some() {
                let current = registry.by_id(VehicleId(1)).expect("vehicle").position;
                registry
                    .update_position(VehicleId(1), Point::new(current.x + 1.0, current.y))
                    .expect("move");
            }
        });

        assert!(ticks < 20, "dispatch should settle before the tick budget");
        assert!(world.get::<Pending>(entity).is_none());
        assert!(world.get::<Assigned>(entity).is_none());
        assert_eq!(
            world.get::<Completed>(entity),
            Some(&Completed {
                vehicle: VehicleId(1)
            })
        );
        let ride = world.get::<RideRequest>(entity).expect("ride");
        assert_eq!(ride.0.bound_vehicle(), None);
        assert!(registry.by_id(VehicleId(1)).expect("vehicle").available);
    }
}
