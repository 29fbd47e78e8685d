//! Point-to-point dispatch: binds ride requests to the nearest eligible idle
//! vehicle and releases vehicles once they reach the rider's destination.
//!
//! - [registry::VehicleRegistry] owns vehicles and their availability
//! - [matching::RequestMatcher] selects and atomically binds a vehicle
//! - [lifecycle::AssignmentLifecycle] detects arrival and releases the vehicle
//!
//! The [runner] and [systems] modules drive the same components from a
//! `bevy_ecs` schedule.

pub mod config;
pub mod ecs;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod matching;
pub mod registry;
pub mod request;
pub mod runner;
pub mod scenario;
pub mod systems;
pub mod telemetry;
pub mod vehicle;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use error::{DispatchError, Result};
