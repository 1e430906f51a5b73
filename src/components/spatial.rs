use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::AircraftControls;
use crate::resources::Atmosphere;

/// Airspeed below which the aerodynamic angle calculations are degenerate.
pub const MIN_AIRSPEED: f64 = 0.1;

/// The full 6DOF state of the aircraft.
///
/// Position is expressed in the NED (North-East-Down) navigation frame, so
/// the down component is positive and altitude is `-position.z`. Velocity
/// and angular velocity are body-frame quantities; orientation is carried
/// as roll/pitch/yaw Euler angles. Only the integrator and the explicit
/// reset/control operations mutate this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position in the NED frame [m].
    pub position: Vector3<f64>,
    /// Linear velocity in the body frame [m/s].
    pub velocity: Vector3<f64>,
    /// Angular velocity in the body frame [rad/s]: roll rate p, pitch rate q, yaw rate r.
    pub angular_velocity: Vector3<f64>,
    /// Roll angle [rad].
    pub roll: f64,
    /// Pitch angle [rad]. Not wrapped; the Euler kinematics are singular at ±π/2.
    pub pitch: f64,
    /// Yaw angle [rad], wrapped to (-π, π] after every integration step.
    pub yaw: f64,
    /// Normalized control inputs.
    pub controls: AircraftControls,
}

impl Default for AircraftState {
    /// Level flight at 1000 m altitude, 50 m/s forward.
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -1000.0),
            velocity: Vector3::new(50.0, 0.0, 0.0),
            angular_velocity: Vector3::zeros(),
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            controls: AircraftControls::default(),
        }
    }
}

impl AircraftState {
    /// True airspeed, the magnitude of the body-frame velocity [m/s].
    pub fn airspeed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Altitude above the ground plane [m].
    pub fn altitude(&self) -> f64 {
        -self.position.z
    }

    /// Rate of climb [m/s]; positive up.
    pub fn vertical_speed(&self) -> f64 {
        -self.velocity.z
    }

    /// Angle of attack α [rad], from the body-frame velocity components.
    /// Returns 0 when the forward speed is too low for the angle to be meaningful.
    pub fn alpha(&self) -> f64 {
        let u = self.velocity.x;
        let w = self.velocity.z;
        if u > MIN_AIRSPEED {
            w.atan2(u)
        } else {
            0.0
        }
    }

    /// Sideslip angle β [rad]. Returns 0 below the minimum airspeed.
    pub fn beta(&self) -> f64 {
        let airspeed = self.airspeed();
        if airspeed > MIN_AIRSPEED {
            (self.velocity.y / airspeed).asin()
        } else {
            0.0
        }
    }

    /// Mach number at the current altitude.
    pub fn mach(&self, atmosphere: &Atmosphere) -> f64 {
        let properties = atmosphere.properties(self.altitude());
        self.airspeed() / properties.speed_of_sound
    }
}
