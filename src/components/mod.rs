pub mod aircraft;
pub mod controls;
pub mod spatial;

pub use aircraft::{
    AircraftAeroCoefficients, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType,
    ConfigError, MassModel, PropulsionConfig, RawAircraftConfig,
};
pub use controls::AircraftControls;
pub use spatial::{AircraftState, MIN_AIRSPEED};
