use nalgebra::Vector3;

use crate::components::{
    AircraftAeroCoefficients, AircraftControls, AircraftGeometry, MIN_AIRSPEED,
};
use crate::systems::AirDataValues;

/// Calculates aerodynamic forces and moments in the body frame from one
/// air-data snapshot. Pure function; all state enters through the
/// arguments, so the four RK4 stages can evaluate it at hypothetical
/// states without touching shared data.
///
/// Forces come back resolved from wind axes into body axes through α;
/// moments are about the body axes (roll L, pitch M, yaw N).
pub fn calculate_aerodynamic_forces_moments(
    geometry: &AircraftGeometry,
    coeffs: &AircraftAeroCoefficients,
    air_data: &AirDataValues,
    angular_velocity: &Vector3<f64>,
    controls: &AircraftControls,
) -> (Vector3<f64>, Vector3<f64>) {
    let alpha = air_data.alpha;
    let beta = air_data.beta;
    let q_dyn = air_data.dynamic_pressure;

    // Non-dimensional body rates; the floor keeps the damping terms finite
    // at rest.
    let airspeed = air_data.true_airspeed.max(MIN_AIRSPEED);
    let p_hat = angular_velocity.x * geometry.wing_span / (2.0 * airspeed);
    let q_hat = angular_velocity.y * geometry.mac / (2.0 * airspeed);
    let r_hat = angular_velocity.z * geometry.wing_span / (2.0 * airspeed);

    let c_l = coeffs.c_l(alpha, controls.elevator);
    // The drag polar reads the stored elevator trim, not the elevator
    // paired with alpha above.
    let c_d = coeffs.c_d(alpha, controls.elevator);
    let c_y = coeffs.c_y(beta, controls.rudder);

    let c_l_roll = coeffs.c_l_roll(beta, controls.aileron, controls.rudder, p_hat);
    let c_m = coeffs.c_m(alpha, controls.elevator, q_hat);
    let c_n = coeffs.c_n(beta, controls.aileron, controls.rudder, r_hat);

    // Wind axes to body axes through alpha: drag opposes x, lift opposes z.
    let ca = alpha.cos();
    let sa = alpha.sin();
    let q_s = q_dyn * geometry.wing_area;

    let forces_body = Vector3::new(
        q_s * (-c_d * ca + c_l * sa),
        q_s * c_y,
        q_s * (-c_d * sa - c_l * ca),
    );

    let moments_body = Vector3::new(
        q_s * geometry.wing_span * c_l_roll,
        q_s * geometry.mac * c_m,
        q_s * geometry.wing_span * c_n,
    );

    (forces_body, moments_body)
}
