//! Trip lifecycle: arrival detection and release of bound vehicles.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;

use crate::error::{DispatchError, Result};
use crate::registry::VehicleRegistry;
use crate::request::Request;
use crate::telemetry::DispatchTelemetry;
use crate::vehicle::VehicleId;

/// Result of one arrival check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalOutcome {
    /// The request holds no vehicle; nothing to check.
    Unassigned,
    /// The bound vehicle has not reached the destination yet.
    InProgress,
    /// The vehicle reached the destination and is back in the available pool.
    Released(VehicleId),
}

impl ArrivalOutcome {
    pub fn released(&self) -> bool {
        matches!(self, ArrivalOutcome::Released(_))
    }
}

#[derive(Resource)]
pub struct AssignmentLifecycle {
    registry: Arc<VehicleRegistry>,
    telemetry: Arc<DispatchTelemetry>,
}

impl AssignmentLifecycle {
    pub fn new(registry: Arc<VehicleRegistry>) -> Self {
        Self {
            registry,
            telemetry: Arc::new(DispatchTelemetry::default()),
        }
    }

    pub fn with_telemetry(mut self, telemetry: Arc<DispatchTelemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn registry(&self) -> &Arc<VehicleRegistry> {
        &self.registry
    }

    /// Complete the trip if the bound vehicle stands exactly on the destination.
    ///
    /// Arrival is exact coincidence on both axes; the layer moving vehicles is
    /// expected to put them on the destination point. Repeated calls are no-ops
    /// until the vehicle arrives, and after the release.
    pub fn check_arrival(&self, request: &mut Request) -> Result<ArrivalOutcome> {
        let Some(vehicle_id) = request.bound_vehicle() else {
            return Ok(ArrivalOutcome::Unassigned);
        };
        let Some(destination) = request.destination() else {
            return Err(DispatchError::MissingDestination(request.id()));
        };

        let vehicle = self.registry.by_id(vehicle_id)?;
        if !vehicle.position.coincides_with(destination) {
            return Ok(ArrivalOutcome::InProgress);
        }

        self.release_binding(request, vehicle_id)?;
        log::debug!(
            "vehicle {} reached {} for request {}",
            vehicle_id,
            destination,
            request.id()
        );
        Ok(ArrivalOutcome::Released(vehicle_id))
    }

    /// Release the bound vehicle without checking the destination, for requests
    /// abandoned after a match committed.
    ///
    /// Returns the released vehicle, or `None` when the request was not bound.
    pub fn unassign(&self, request: &mut Request) -> Result<Option<VehicleId>> {
        let Some(vehicle_id) = request.bound_vehicle() else {
            return Ok(None);
        };
        self.release_binding(request, vehicle_id)?;
        log::debug!("request {} unassigned from vehicle {}", request.id(), vehicle_id);
        Ok(Some(vehicle_id))
    }

    // The vehicle goes back to the pool before the binding is cleared, so a
    // failed lookup leaves the request bound.
    fn release_binding(&self, request: &mut Request, vehicle_id: VehicleId) -> Result<()> {
        if self.registry.release(vehicle_id)? {
            self.telemetry.record_released();
        } else {
            log::warn!(
                "vehicle {} bound to request {} was already available",
                vehicle_id,
                request.id()
            );
        }
        request.unbind();
        Ok(())
    }
}
