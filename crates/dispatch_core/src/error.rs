use crate::request::RequestId;
use crate::vehicle::VehicleId;

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Errors returned by the registry, the matcher and the trip lifecycle.
///
/// None of these are fatal; every variant is handed back to the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("vehicle {0} is already registered")]
    DuplicateId(VehicleId),
    #[error("vehicle {0} is not registered")]
    UnknownVehicle(VehicleId),
    #[error("no vehicle available for request {0}")]
    NoVehicleAvailable(RequestId),
    #[error("request {0} has no destination")]
    MissingDestination(RequestId),
    #[error("request {request} is already bound to vehicle {vehicle}")]
    AlreadyBound {
        request: RequestId,
        vehicle: VehicleId,
    },
    #[error("invalid dispatch config: {0}")]
    InvalidConfig(String),
}

impl DispatchError {
    /// Whether the same call may succeed later without any caller-side fix.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DispatchError::NoVehicleAvailable(_))
    }
}
