pub mod aerodynamics;
pub mod air_data;
pub mod integrator;

pub use aerodynamics::calculate_aerodynamic_forces_moments;
pub use air_data::AirDataValues;
pub use integrator::FlightDynamics;
