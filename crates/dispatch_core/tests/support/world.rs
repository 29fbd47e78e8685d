#![allow(dead_code)]

use std::sync::Arc;

use bevy_ecs::prelude::{Entity, World};
use dispatch_core::config::DispatchConfig;
use dispatch_core::geometry::Point;
use dispatch_core::registry::VehicleRegistry;
use dispatch_core::request::{Request, RequestId, TierRequirement};
use dispatch_core::runner::{install_dispatch, spawn_request};
use dispatch_core::telemetry::DispatchTelemetry;
use dispatch_core::test_helpers::register_reference_fleet;
use dispatch_core::vehicle::{Tier, Vehicle, VehicleId};

/// Builder for reproducible dispatch worlds.
#[derive(Debug, Default)]
pub struct TestWorldBuilder {
    config: DispatchConfig,
    reference_fleet: bool,
    extra_vehicles: Vec<Vehicle>,
}

/// A built world plus handles to the shared state behind its resources.
pub struct TestWorld {
    pub world: World,
    pub registry: Arc<VehicleRegistry>,
    pub telemetry: Arc<DispatchTelemetry>,
}

impl TestWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the three-vehicle reference fleet.
    pub fn with_reference_fleet(mut self) -> Self {
        self.reference_fleet = true;
        self
    }

    pub fn with_vehicle(mut self, id: u32, x: f64, y: f64, tier: Tier) -> Self {
        self.extra_vehicles
            .push(Vehicle::new(VehicleId(id), Point::new(x, y), tier));
        self
    }

    pub fn with_unavailable_vehicle(mut self, id: u32, x: f64, y: f64, tier: Tier) -> Self {
        self.extra_vehicles
            .push(Vehicle::new(VehicleId(id), Point::new(x, y), tier).unavailable());
        self
    }

    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestWorld {
        let registry = Arc::new(VehicleRegistry::new());
        if self.reference_fleet {
            register_reference_fleet(&registry);
        }
        for vehicle in self.extra_vehicles {
            registry
                .register_vehicle(vehicle)
                .expect("test vehicle ids must be unique");
        }
        let mut world = World::new();
        let telemetry = install_dispatch(&mut world, Arc::clone(&registry), self.config);
        TestWorld {
            world,
            registry,
            telemetry,
        }
    }
}

impl TestWorld {
    /// Spawn a pending request at `pickup`, heading to `destination` if given.
    pub fn spawn_request(
        &mut self,
        id: u64,
        pickup: (f64, f64),
        destination: Option<(f64, f64)>,
        requirement: TierRequirement,
    ) -> Entity {
        let mut request = Request::new(RequestId(id), pickup.into(), requirement);
        if let Some(destination) = destination {
            request.set_destination(destination.into());
        }
        spawn_request(&mut self.world, request)
    }

    pub fn move_vehicle(&self, id: u32, x: f64, y: f64) {
        self.registry
            .update_position(VehicleId(id), Point::new(x, y))
            .expect("vehicle must be registered");
    }
}
