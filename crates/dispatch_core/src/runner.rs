//! Dispatch runner: wires the core components into an ECS world and ticks the schedule.
//!
//! One tick runs [matching_system] then [arrival_system], each followed by
//! [apply_deferred] so state markers are applied before the next stage. Vehicle
//! movement is not simulated here; callers move vehicles between ticks through
//! the registry (see [run_ticks_with_hook]).

use std::sync::Arc;

use bevy_ecs::prelude::{Entity, Or, Schedule, With, World};
use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

use crate::config::DispatchConfig;
use crate::ecs::{Assigned, Pending, RideRequest};
use crate::lifecycle::AssignmentLifecycle;
use crate::matching::RequestMatcher;
use crate::registry::VehicleRegistry;
use crate::request::Request;
use crate::systems::{arrival::arrival_system, matching::matching_system};
use crate::telemetry::DispatchTelemetry;

/// Insert the matcher (which owns `config`) and lifecycle resources, sharing one
/// registry and one telemetry instance. Returns the telemetry handle.
pub fn install_dispatch(
    world: &mut World,
    registry: Arc<VehicleRegistry>,
    config: DispatchConfig,
) -> Arc<DispatchTelemetry> {
    let telemetry = Arc::new(DispatchTelemetry::default());
    world.insert_resource(
        RequestMatcher::new(Arc::clone(&registry))
            .with_config(config)
            .with_telemetry(Arc::clone(&telemetry)),
    );
    world.insert_resource(
        AssignmentLifecycle::new(registry).with_telemetry(Arc::clone(&telemetry)),
    );
    telemetry
}

/// Spawn a request entity waiting for a vehicle.
pub fn spawn_request(world: &mut World, request: Request) -> Entity {
    world.spawn((RideRequest(request), Pending)).id()
}

/// Builds the dispatch schedule: matching, then arrival polling.
pub fn dispatch_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((matching_system, apply_deferred, arrival_system, apply_deferred).chain());
    schedule
}

/// Whether any request is still waiting for a vehicle or on a trip.
pub fn has_active_requests(world: &mut World) -> bool {
    world
        .query_filtered::<Entity, Or<(With<Pending>, With<Assigned>)>>()
        .iter(world)
        .next()
        .is_some()
}

/// Runs ticks until no request is active or `max_ticks` is reached.
/// Returns the number of ticks executed.
pub fn run_ticks(world: &mut World, schedule: &mut Schedule, max_ticks: usize) -> usize {
    run_ticks_with_hook(world, schedule, max_ticks, |_, _| {})
}

/// Like [run_ticks], invoking `hook` with the world and tick index after each tick.
pub fn run_ticks_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    max_ticks: usize,
    mut hook: F,
) -> usize
where
    F: FnMut(&World, usize),
{
    let mut ticks = 0;
    while ticks < max_ticks && has_active_requests(world) {
        schedule.run(world);
        hook(world, ticks);
        ticks += 1;
    }
    ticks
}
