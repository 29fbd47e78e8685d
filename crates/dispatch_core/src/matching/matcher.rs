use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rayon::prelude::*;

use crate::config::DispatchConfig;
use crate::error::{DispatchError, Result};
use crate::registry::VehicleRegistry;
use crate::request::Request;
use crate::telemetry::DispatchTelemetry;
use crate::vehicle::VehicleId;

use super::algorithm::MatchingAlgorithm;
use super::nearest::NearestMatching;

/// Binds requests to eligible idle vehicles.
///
/// Selection runs on a snapshot of the available pool; the binding itself is a
/// compare-and-set on the chosen vehicle's availability. When another caller
/// takes the vehicle between snapshot and commit, the pool is re-read and the
/// selection repeated.
#[derive(Resource)]
pub struct RequestMatcher {
    registry: Arc<VehicleRegistry>,
    algorithm: Box<dyn MatchingAlgorithm>,
    config: DispatchConfig,
    telemetry: Arc<DispatchTelemetry>,
}

impl RequestMatcher {
    /// Nearest-vehicle matcher over `registry` with default config.
    pub fn new(registry: Arc<VehicleRegistry>) -> Self {
        Self {
            registry,
            algorithm: Box::new(NearestMatching),
            config: DispatchConfig::default(),
            telemetry: Arc::new(DispatchTelemetry::default()),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_telemetry(mut self, telemetry: Arc<DispatchTelemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn registry(&self) -> &Arc<VehicleRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn telemetry(&self) -> &Arc<DispatchTelemetry> {
        &self.telemetry
    }

    /// Find the nearest eligible vehicle for `request` and bind it.
    ///
    /// On success the vehicle is unavailable and `request` is bound to it. On
    /// [`DispatchError::NoVehicleAvailable`] nothing was mutated. A request that
    /// is still bound is rejected with [`DispatchError::AlreadyBound`].
    pub fn match_request(&self, request: &mut Request) -> Result<VehicleId> {
        if let Some(vehicle) = request.bound_vehicle() {
            return Err(DispatchError::AlreadyBound {
                request: request.id(),
                vehicle,
            });
        }

        let filter = self.config.filter_for(request.tier_requirement());
        let mut attempts_left: Option<usize> = None;

        loop {
            let pool = self.registry.available(filter);
            let Some(candidate) = self.algorithm.select(request.pickup(), &pool) else {
                break;
            };
            let remaining =
                attempts_left.get_or_insert_with(|| self.config.commit_attempts(pool.len()));
            *remaining -= 1;

            if self.registry.try_reserve(candidate.vehicle_id)? {
                request.bind(candidate.vehicle_id);
                self.telemetry.record_matched();
                log::debug!(
                    "request {} bound to vehicle {} (pickup distance {:.3})",
                    request.id(),
                    candidate.vehicle_id,
                    candidate.pickup_distance
                );
                return Ok(candidate.vehicle_id);
            }

            self.telemetry.record_commit_conflict();
            log::trace!(
                "vehicle {} taken before request {} could commit, {} attempts left",
                candidate.vehicle_id,
                request.id(),
                remaining
            );
            if *remaining == 0 {
                break;
            }
        }

        self.telemetry.record_unmatched();
        log::debug!("no vehicle available for request {}", request.id());
        Err(DispatchError::NoVehicleAvailable(request.id()))
    }

    /// Match independent requests in parallel on the rayon pool.
    ///
    /// Results line up with `requests`. Each vehicle ends up bound to at most one
    /// request, but which request wins a contested vehicle depends on scheduling.
    pub fn match_batch(&self, requests: &mut [Request]) -> Vec<Result<VehicleId>> {
        requests
            .par_iter_mut()
            .map(|request| self.match_request(request))
            .collect()
    }
}
