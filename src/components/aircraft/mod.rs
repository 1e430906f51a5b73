pub mod config;

pub use config::{
    AircraftAeroCoefficients, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType,
    ConfigError, MassModel, PropulsionConfig, RawAircraftConfig,
};
