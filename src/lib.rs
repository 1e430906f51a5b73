//! 6DOF fixed-wing flight dynamics.
//!
//! The crate advances an [`AircraftState`] in time under an ISA atmosphere
//! and a linear aerodynamic derivative model, using classical 4th-order
//! Runge-Kutta integration at a fixed timestep. Rendering, audio and input
//! mapping are external collaborators: they read the state after each tick
//! and write control inputs between ticks, but never take part in the
//! integration itself.
//!
//! ```
//! use skyhawk::{AircraftConfig, AircraftState, FlightDynamics, PhysicsConfig};
//!
//! let dynamics = FlightDynamics::new(AircraftConfig::default(), PhysicsConfig::default());
//! let mut state = AircraftState::default();
//!
//! let dt = dynamics.physics.timestep;
//! for _ in 0..60 {
//!     state = dynamics.advance(&state, dt);
//! }
//! assert!(state.altitude() > 0.0);
//! ```

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{
    AircraftAeroCoefficients, AircraftConfig, AircraftControls, AircraftGeometry, AircraftSource,
    AircraftState, AircraftType, ConfigError, MassModel, PropulsionConfig, RawAircraftConfig,
};
pub use resources::{Atmosphere, AtmosphericProperties, PhysicsConfig};
pub use systems::{AirDataValues, FlightDynamics};
