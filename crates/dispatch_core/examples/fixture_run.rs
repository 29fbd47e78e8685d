//! Replay the reference dispatch situations and print what a rider would be told.
//!
//! Run with: RUST_LOG=debug cargo run -p dispatch_core --example fixture_run

use std::sync::Arc;

use dispatch_core::error::DispatchError;
use dispatch_core::geometry::Point;
use dispatch_core::lifecycle::{ArrivalOutcome, AssignmentLifecycle};
use dispatch_core::matching::RequestMatcher;
use dispatch_core::registry::VehicleRegistry;
use dispatch_core::request::{Request, RequestId, TierRequirement};
use dispatch_core::telemetry::DispatchTelemetry;
use dispatch_core::vehicle::{Tier, Vehicle, VehicleId};

fn book(matcher: &RequestMatcher, request: &mut Request) {
    match matcher.match_request(request) {
        Ok(vehicle) => println!("Vehicle {vehicle} has been assigned to you. Enjoy your ride."),
        Err(DispatchError::NoVehicleAvailable(_)) => println!("No vehicles available right now."),
        Err(err) => println!("Booking failed: {err}"),
    }
}

fn poll(lifecycle: &AssignmentLifecycle, request: &mut Request) {
    match lifecycle.check_arrival(request) {
        Ok(ArrivalOutcome::Released(_)) => println!("Destination reached!"),
        Ok(_) => {}
        Err(DispatchError::MissingDestination(_)) => println!("Please specify the destination."),
        Err(err) => println!("Arrival check failed: {err}"),
    }
}

fn rider(id: u64, destination: (f64, f64), requirement: TierRequirement) -> Request {
    Request::new(RequestId(id), Point::new(0.0, 0.0), requirement)
        .with_destination(destination.into())
}

fn main() -> Result<(), DispatchError> {
    env_logger::init();

    let registry = Arc::new(VehicleRegistry::new());
    registry.register(VehicleId(1), Point::new(20.0, 0.0), Tier::Standard)?;
    registry.register(VehicleId(2), Point::new(0.0, 10.0), Tier::Comfort)?;
    registry.register(VehicleId(3), Point::new(7.0, 24.0), Tier::Premium)?;

    let telemetry = Arc::new(DispatchTelemetry::default());
    let matcher =
        RequestMatcher::new(Arc::clone(&registry)).with_telemetry(Arc::clone(&telemetry));
    let lifecycle =
        AssignmentLifecycle::new(Arc::clone(&registry)).with_telemetry(Arc::clone(&telemetry));

    println!("--- Nearest vehicle ---");
    let mut first = rider(1, (42.0, 11.0), TierRequirement::Any);
    book(&matcher, &mut first);
    poll(&lifecycle, &mut first);

    println!("--- Nearest vehicle already busy ---");
    registry.register_vehicle(
        Vehicle::new(VehicleId(4), Point::new(3.0, 4.0), Tier::Comfort).unavailable(),
    )?;
    let mut second = rider(2, (10.0, 20.0), TierRequirement::Any);
    book(&matcher, &mut second);
    poll(&lifecycle, &mut second);

    println!("--- Special tier request ---");
    let mut third = rider(3, (0.0, 200.0), TierRequirement::Special);
    book(&matcher, &mut third);
    poll(&lifecycle, &mut third);

    println!("--- Fleet exhausted ---");
    let mut fourth = rider(4, (100.0, 0.0), TierRequirement::Any);
    book(&matcher, &mut fourth);
    poll(&lifecycle, &mut fourth);

    println!("--- First trip completes ---");
    registry.update_position(VehicleId(2), Point::new(42.0, 11.0))?;
    poll(&lifecycle, &mut first);
    book(&matcher, &mut fourth);

    let snapshot = telemetry.snapshot();
    println!(
        "matched={} unmatched={} released={} active={}",
        snapshot.matched,
        snapshot.unmatched,
        snapshot.released,
        snapshot.active_assignments()
    );
    Ok(())
}
