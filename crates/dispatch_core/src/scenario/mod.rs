//! Scenario setup: seeded random fleets and request streams.
//!
//! Used by benchmarks, load tests and demos; a fixed seed always yields the
//! same registration order, positions and tiers.

mod build;
mod params;

pub use build::{build_registry, random_requests};
pub use params::ScenarioParams;
