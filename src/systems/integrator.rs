use nalgebra::{Rotation3, Vector3};
use std::f64::consts::PI;

use crate::components::{AircraftConfig, AircraftState};
use crate::resources::{Atmosphere, PhysicsConfig};
use crate::systems::{calculate_aerodynamic_forces_moments, AirDataValues};

/// Time derivative of the full 6DOF state, produced and consumed within a
/// single RK4 step.
#[derive(Debug, Clone, Copy)]
struct StateDerivative {
    position_dot: Vector3<f64>,
    velocity_dot: Vector3<f64>,
    angular_velocity_dot: Vector3<f64>,
    euler_dot: Vector3<f64>,
}

/// The equations-of-motion integrator.
///
/// Holds only immutable configuration; `advance` is a pure transformer
/// from one state snapshot to the next, so calls are reentrant and the
/// derivative can be evaluated at the hypothetical intermediate states
/// RK4 requires without any shared mutation.
#[derive(Debug, Clone)]
pub struct FlightDynamics {
    pub aircraft: AircraftConfig,
    pub physics: PhysicsConfig,
    pub atmosphere: Atmosphere,
}

impl FlightDynamics {
    pub fn new(aircraft: AircraftConfig, physics: PhysicsConfig) -> Self {
        Self {
            aircraft,
            physics,
            atmosphere: Atmosphere::new(),
        }
    }

    /// Advances the state by `dt` seconds using classical 4th-order
    /// Runge-Kutta, then applies the yaw wrap and ground contact rules.
    /// Control inputs are carried through unchanged.
    pub fn advance(&self, state: &AircraftState, dt: f64) -> AircraftState {
        let k1 = self.derivative(state);
        let k2 = self.derivative(&Self::add_scaled(state, &k1, dt * 0.5));
        let k3 = self.derivative(&Self::add_scaled(state, &k2, dt * 0.5));
        let k4 = self.derivative(&Self::add_scaled(state, &k3, dt));

        let mut next = state.clone();
        let weight = dt / 6.0;

        next.position += (k1.position_dot
            + 2.0 * k2.position_dot
            + 2.0 * k3.position_dot
            + k4.position_dot)
            * weight;
        next.velocity += (k1.velocity_dot
            + 2.0 * k2.velocity_dot
            + 2.0 * k3.velocity_dot
            + k4.velocity_dot)
            * weight;
        next.angular_velocity += (k1.angular_velocity_dot
            + 2.0 * k2.angular_velocity_dot
            + 2.0 * k3.angular_velocity_dot
            + k4.angular_velocity_dot)
            * weight;

        let euler_dot =
            (k1.euler_dot + 2.0 * k2.euler_dot + 2.0 * k3.euler_dot + k4.euler_dot) * weight;
        next.roll += euler_dot.x;
        next.pitch += euler_dot.y;
        next.yaw += euler_dot.z;

        // Wrap yaw into (-π, π]
        while next.yaw > PI {
            next.yaw -= 2.0 * PI;
        }
        while next.yaw <= -PI {
            next.yaw += 2.0 * PI;
        }

        // Ground contact: inelastic full stop at the ground plane
        if next.position.z >= 0.0 {
            next.position.z = 0.0;
            next.velocity = Vector3::zeros();
            next.angular_velocity = Vector3::zeros();
        }

        next
    }

    /// Returns the canonical initial condition: 1000 m altitude, 50 m/s
    /// forward, wings level. Control inputs are left untouched.
    pub fn reset(&self, state: &AircraftState) -> AircraftState {
        AircraftState {
            position: Vector3::new(0.0, 0.0, -1000.0),
            velocity: Vector3::new(50.0, 0.0, 0.0),
            angular_velocity: Vector3::zeros(),
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            controls: state.controls,
        }
    }

    /// Evaluates the state derivative at a (possibly hypothetical) state.
    /// Atmosphere, air data and coefficients are all recomputed from the
    /// argument, never from a stored canonical state.
    fn derivative(&self, state: &AircraftState) -> StateDerivative {
        let properties = self.atmosphere.properties(state.altitude());
        let air_data = AirDataValues::calculate(state, properties.density);

        let (aero_forces, moments) = calculate_aerodynamic_forces_moments(
            &self.aircraft.geometry,
            &self.aircraft.aero_coef,
            &air_data,
            &state.angular_velocity,
            &state.controls,
        );

        let thrust = Vector3::new(
            state.controls.throttle * self.aircraft.propulsion.max_thrust,
            0.0,
            0.0,
        );

        // Gravity resolved into body axes through roll and pitch
        let (sin_roll, cos_roll) = state.roll.sin_cos();
        let (sin_pitch, cos_pitch) = state.pitch.sin_cos();
        let weight = self.aircraft.mass.mass * self.physics.gravity;
        let gravity = Vector3::new(
            -weight * sin_pitch,
            weight * sin_roll * cos_pitch,
            weight * cos_roll * cos_pitch,
        );

        let forces = aero_forces + thrust + gravity;

        // Body velocity rotated into the NED frame (ZYX Euler convention)
        let body_to_ned = Rotation3::from_euler_angles(state.roll, state.pitch, state.yaw);
        let position_dot = body_to_ned * state.velocity;

        // Newton in the rotating body frame
        let velocity_dot =
            forces / self.aircraft.mass.mass - state.angular_velocity.cross(&state.velocity);

        // Euler's rigid-body equations with a diagonal inertia tensor
        let p = state.angular_velocity.x;
        let q = state.angular_velocity.y;
        let r = state.angular_velocity.z;
        let ixx = self.aircraft.mass.ixx();
        let iyy = self.aircraft.mass.iyy();
        let izz = self.aircraft.mass.izz();

        let angular_velocity_dot = Vector3::new(
            (moments.x - (izz - iyy) * q * r) / ixx,
            (moments.y - (ixx - izz) * p * r) / iyy,
            (moments.z - (iyy - ixx) * p * q) / izz,
        );

        // Body rates to Euler-angle rates; singular at pitch = ±π/2
        let tan_pitch = state.pitch.tan();
        let euler_dot = Vector3::new(
            p + sin_roll * tan_pitch * q + cos_roll * tan_pitch * r,
            cos_roll * q - sin_roll * r,
            (sin_roll * q + cos_roll * r) / cos_pitch,
        );

        StateDerivative {
            position_dot,
            velocity_dot,
            angular_velocity_dot,
            euler_dot,
        }
    }

    /// Component-wise `state + derivative * scale`, forming the
    /// hypothetical intermediate states of the RK4 stages. Controls are
    /// copied through unchanged.
    fn add_scaled(state: &AircraftState, deriv: &StateDerivative, scale: f64) -> AircraftState {
        AircraftState {
            position: state.position + deriv.position_dot * scale,
            velocity: state.velocity + deriv.velocity_dot * scale,
            angular_velocity: state.angular_velocity + deriv.angular_velocity_dot * scale,
            roll: state.roll + deriv.euler_dot.x * scale,
            pitch: state.pitch + deriv.euler_dot.y * scale,
            yaw: state.yaw + deriv.euler_dot.z * scale,
            controls: state.controls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AircraftControls;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    const DT: f64 = 1.0 / 60.0;

    fn dynamics() -> FlightDynamics {
        FlightDynamics::new(AircraftConfig::default(), PhysicsConfig::default())
    }

    #[test]
    fn test_advance_is_deterministic() {
        let dynamics = dynamics();
        let state = AircraftState::default();

        let first = dynamics.advance(&state, DT);
        let second = dynamics.advance(&state, DT);

        assert_eq!(first, second);
    }

    #[test]
    fn test_free_fall_from_rest() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        state.velocity = Vector3::zeros();
        state.controls.throttle = 0.0;

        let next = dynamics.advance(&state, DT);

        // With no airspeed and no thrust only gravity acts, straight down
        // the body z-axis
        assert_relative_eq!(next.velocity.z, 9.81 * DT, epsilon = 1e-3);
        assert_relative_eq!(next.velocity.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ground_contact_clamps_and_stops() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        state.position = Vector3::new(0.0, 0.0, -0.05);
        state.velocity = Vector3::new(50.0, 0.0, 20.0);

        let next = dynamics.advance(&state, DT);

        assert_eq!(next.position.z, 0.0);
        assert_eq!(next.velocity, Vector3::zeros());
        assert_eq!(next.angular_velocity, Vector3::zeros());
    }

    #[test]
    fn test_grounded_aircraft_stays_grounded() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        state.position = Vector3::new(0.0, 0.0, -0.05);
        state.velocity = Vector3::new(0.0, 0.0, 10.0);
        state.controls.throttle = 0.0;

        for _ in 0..30 {
            state = dynamics.advance(&state, DT);
        }

        assert_eq!(state.position.z, 0.0);
        assert_eq!(state.velocity, Vector3::zeros());
    }

    #[test]
    fn test_yaw_wraps_at_pi() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        state.yaw = PI - 0.01;
        state.angular_velocity = Vector3::new(0.0, 0.0, 1.5);

        let next = dynamics.advance(&state, DT);

        assert!(next.yaw > -PI && next.yaw <= PI);
        // Crossed the boundary, so it re-enters from the negative side
        assert!(next.yaw < 0.0, "yaw should have wrapped, got {}", next.yaw);
    }

    #[test]
    fn test_yaw_wraps_from_negative_side() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        state.yaw = -PI + 0.01;
        state.angular_velocity = Vector3::new(0.0, 0.0, -1.5);

        let next = dynamics.advance(&state, DT);

        assert!(next.yaw > -PI && next.yaw <= PI);
        assert!(next.yaw > 0.0, "yaw should have wrapped, got {}", next.yaw);
    }

    #[test]
    fn test_reset_is_idempotent_and_keeps_controls() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        state.controls = AircraftControls {
            elevator: -0.2,
            aileron: 0.1,
            rudder: 0.05,
            throttle: 0.8,
        };

        // Fly for a while to scramble the state
        for _ in 0..120 {
            state = dynamics.advance(&state, DT);
        }

        let once = dynamics.reset(&state);
        let twice = dynamics.reset(&once);

        assert_eq!(once, twice);
        assert_relative_eq!(once.altitude(), 1000.0);
        assert_relative_eq!(once.airspeed(), 50.0);
        assert_eq!(once.controls.elevator, -0.2);
        assert_eq!(once.controls.throttle, 0.8);
    }

    #[test]
    fn test_controls_carried_through_advance() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        state.controls.set_elevator(-0.3);
        state.controls.set_aileron(0.2);

        let next = dynamics.advance(&state, DT);

        assert_eq!(next.controls, state.controls);
    }

    #[test]
    fn test_up_elevator_pitches_nose_up() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        // Stick back: negative elevator, positive pitching moment
        state.controls.set_elevator(-0.5);

        for _ in 0..30 {
            state = dynamics.advance(&state, DT);
        }

        assert!(
            state.angular_velocity.y > 0.0,
            "expected positive pitch rate, got {}",
            state.angular_velocity.y
        );
    }

    #[test]
    fn test_right_aileron_rolls_right() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        state.controls.set_aileron(0.3);

        for _ in 0..30 {
            state = dynamics.advance(&state, DT);
        }

        assert!(
            state.roll > 0.0,
            "expected positive roll angle, got {}",
            state.roll
        );
    }

    #[test]
    fn test_state_stays_finite_with_extreme_inputs() {
        let dynamics = dynamics();
        let mut state = AircraftState::default();
        state.controls = AircraftControls {
            elevator: 1.0,
            aileron: -1.0,
            rudder: 1.0,
            throttle: 1.0,
        };

        for _ in 0..600 {
            state = dynamics.advance(&state, DT);

            assert!(state.position.iter().all(|v| v.is_finite()));
            assert!(state.velocity.iter().all(|v| v.is_finite()));
            assert!(state.angular_velocity.iter().all(|v| v.is_finite()));
            assert!(state.roll.is_finite() && state.pitch.is_finite() && state.yaw.is_finite());
        }
    }
}
