use serde::Deserialize;

use crate::error::{DispatchError, Result};

/// Default plane: a 100 × 100 square with the origin in a corner.
const DEFAULT_EXTENT: f64 = 100.0;

/// Parameters for building a random fleet and request stream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub num_vehicles: usize,
    /// Share of vehicles registered as comfort tier (0.0–1.0).
    pub comfort_share: f64,
    /// Share of vehicles registered as premium tier (0.0–1.0).
    pub premium_share: f64,
    /// Share of vehicles registered out of the available pool (0.0–1.0).
    pub out_of_service_share: f64,
    /// Share of generated requests that demand the special tier (0.0–1.0).
    pub special_request_share: f64,
    pub width: f64,
    pub height: f64,
    /// Snap generated coordinates to whole numbers, so vehicles can land exactly on points.
    pub integer_coordinates: bool,
    /// Seed for RNG (for reproducibility). If None, seeded from entropy.
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_vehicles: 100,
            comfort_share: 0.3,
            premium_share: 0.1,
            out_of_service_share: 0.0,
            special_request_share: 0.1,
            width: DEFAULT_EXTENT,
            height: DEFAULT_EXTENT,
            integer_coordinates: true,
            seed: None,
        }
    }
}

impl ScenarioParams {
    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DispatchError::InvalidConfig(e.to_string()))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_num_vehicles(mut self, num_vehicles: usize) -> Self {
        self.num_vehicles = num_vehicles;
        self
    }

    /// Set the plane size; coordinates are drawn from [0, width) × [0, height).
    pub fn with_extent(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the comfort and premium shares; the remainder is standard tier.
    pub fn with_tier_shares(mut self, comfort_share: f64, premium_share: f64) -> Self {
        self.comfort_share = comfort_share;
        self.premium_share = premium_share;
        self
    }

    pub fn with_out_of_service_share(mut self, share: f64) -> Self {
        self.out_of_service_share = share;
        self
    }

    pub fn with_special_request_share(mut self, share: f64) -> Self {
        self.special_request_share = share;
        self
    }

    pub fn with_integer_coordinates(mut self, integer_coordinates: bool) -> Self {
        self.integer_coordinates = integer_coordinates;
        self
    }
}
