//! Test helpers for common test setup and utilities.
//!
//! This module provides shared fixtures so unit tests, integration tests and
//! benches start from the same fleet.

use std::sync::Arc;

use bevy_ecs::prelude::World;

use crate::config::DispatchConfig;
use crate::geometry::Point;
use crate::registry::VehicleRegistry;
use crate::runner::install_dispatch;
use crate::telemetry::DispatchTelemetry;
use crate::vehicle::{Tier, VehicleId};

/// The three-vehicle reference fleet, in registration order:
/// `1` at (20, 0) standard, `2` at (0, 10) comfort, `3` at (7, 24) premium.
pub const REFERENCE_FLEET: [(u32, f64, f64, Tier); 3] = [
    (1, 20.0, 0.0, Tier::Standard),
    (2, 0.0, 10.0, Tier::Comfort),
    (3, 7.0, 24.0, Tier::Premium),
];

/// Register the reference fleet, all available.
///
/// # Panics
///
/// Panics if `registry` already holds one of the reference ids.
pub fn register_reference_fleet(registry: &VehicleRegistry) {
    for (id, x, y, tier) in REFERENCE_FLEET {
        registry
            .register(VehicleId(id), Point::new(x, y), tier)
            .expect("reference fleet ids must be free");
    }
}

/// A fresh shared registry holding the reference fleet.
pub fn reference_registry() -> Arc<VehicleRegistry> {
    let registry = VehicleRegistry::new();
    register_reference_fleet(&registry);
    Arc::new(registry)
}

/// Create a world with dispatch resources installed over `registry`.
pub fn create_test_world(registry: Arc<VehicleRegistry>) -> (World, Arc<DispatchTelemetry>) {
    let mut world = World::new();
    let telemetry = install_dispatch(&mut world, registry, DispatchConfig::default());
    (world, telemetry)
}
