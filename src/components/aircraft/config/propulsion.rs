use serde::{Deserialize, Serialize};

/// Configuration for the aircraft powerplant.
///
/// Thrust is modeled as `throttle * max_thrust` along the body x-axis;
/// there is no altitude or airspeed lapse in this version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropulsionConfig {
    /// Maximum thrust at sea level static conditions (N).
    pub max_thrust: f64,
}

impl PropulsionConfig {
    pub fn new(max_thrust: f64) -> Self {
        Self { max_thrust }
    }

    pub fn cessna_172() -> Self {
        Self::new(2000.0)
    }
}
