use serde::{Deserialize, Serialize};

/// Normalized control inputs for the aircraft.
///
/// Control surfaces are normalized deflections in `[-1, 1]`; throttle is
/// a power fraction in `[0, 1]`. The setters clamp into range so callers
/// feeding raw axis values cannot push the state out of its envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftControls {
    /// Elevator deflection, pitch control [-1, 1].
    pub elevator: f64,
    /// Aileron deflection, roll control [-1, 1].
    pub aileron: f64,
    /// Rudder deflection, yaw control [-1, 1].
    pub rudder: f64,
    /// Throttle setting [0, 1].
    pub throttle: f64,
}

impl Default for AircraftControls {
    /// Neutral surfaces with the throttle at cruise power.
    fn default() -> Self {
        Self {
            elevator: 0.0,
            aileron: 0.0,
            rudder: 0.0,
            throttle: 0.5,
        }
    }
}

impl AircraftControls {
    pub fn set_elevator(&mut self, value: f64) {
        self.elevator = value.clamp(-1.0, 1.0);
    }

    pub fn set_aileron(&mut self, value: f64) {
        self.aileron = value.clamp(-1.0, 1.0);
    }

    pub fn set_rudder(&mut self, value: f64) {
        self.rudder = value.clamp(-1.0, 1.0);
    }

    pub fn set_throttle(&mut self, value: f64) {
        self.throttle = value.clamp(0.0, 1.0);
    }
}
