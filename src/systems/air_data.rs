use crate::components::AircraftState;

/// Air data derived from one state snapshot: the inputs every aerodynamic
/// calculation needs. Ephemeral; recomputed at each derivative evaluation.
#[derive(Debug, Clone, Copy)]
pub struct AirDataValues {
    /// True airspeed (m/s).
    pub true_airspeed: f64,
    /// Angle of attack α (rad).
    pub alpha: f64,
    /// Sideslip angle β (rad).
    pub beta: f64,
    /// Air density at the state's altitude (kg/m³).
    pub density: f64,
    /// Dynamic pressure ½ρV² (Pa).
    pub dynamic_pressure: f64,
}

impl AirDataValues {
    /// Computes air data from a state snapshot and the local air density.
    /// The aerodynamic angles inherit the state accessors' low-speed guards.
    pub fn calculate(state: &AircraftState, density: f64) -> Self {
        let true_airspeed = state.airspeed();
        let dynamic_pressure = 0.5 * density * true_airspeed * true_airspeed;

        Self {
            true_airspeed,
            alpha: state.alpha(),
            beta: state.beta(),
            density,
            dynamic_pressure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_level_flight_air_data() {
        let state = AircraftState::default();
        let air_data = AirDataValues::calculate(&state, 1.225);

        assert_relative_eq!(air_data.true_airspeed, 50.0);
        assert_relative_eq!(air_data.alpha, 0.0);
        assert_relative_eq!(air_data.beta, 0.0);
        assert_relative_eq!(air_data.dynamic_pressure, 0.5 * 1.225 * 2500.0);
    }

    #[test]
    fn test_air_data_at_rest() {
        let mut state = AircraftState::default();
        state.velocity = Vector3::zeros();

        let air_data = AirDataValues::calculate(&state, 1.225);

        assert_relative_eq!(air_data.true_airspeed, 0.0);
        assert_relative_eq!(air_data.alpha, 0.0);
        assert_relative_eq!(air_data.beta, 0.0);
        assert_relative_eq!(air_data.dynamic_pressure, 0.0);
    }
}
