use serde::{Deserialize, Serialize};

/// Global physics parameters for the simulation loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed integration timestep (s).
    pub timestep: f64,
    /// Gravitational acceleration used in the equations of motion (m/s²).
    pub gravity: f64,
}

impl Default for PhysicsConfig {
    /// 60 Hz fixed tick with standard gravity.
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            gravity: 9.81,
        }
    }
}
