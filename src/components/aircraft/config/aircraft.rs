use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{ConfigError, RawAircraftConfig};
use crate::components::{AircraftAeroCoefficients, AircraftGeometry, MassModel, PropulsionConfig};

/// The full aircraft configuration: mass, geometry, aerodynamic
/// coefficients and propulsion. Immutable for the session; the integrator
/// only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Name of the aircraft, defaults to the type name.
    pub name: String,
    /// Type of aircraft represented as an enum, e.g. Cessna172.
    pub ac_type: AircraftType,
    /// Mass model of the aircraft, including weight and inertia properties.
    pub mass: MassModel,
    /// The geometric properties of the aircraft, such as wing span and chord.
    pub geometry: AircraftGeometry,
    /// Aerodynamic coefficients for calculating forces and moments on the aircraft.
    pub aero_coef: AircraftAeroCoefficients,
    /// Engine properties.
    pub propulsion: PropulsionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftType {
    Cessna172,
    Custom(String),
}

/// Where an aircraft configuration comes from: a compiled-in profile or a
/// YAML file on disk.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

impl Default for AircraftConfig {
    /// The `Cessna172` reference profile.
    fn default() -> Self {
        Self::from_programmed(AircraftType::Cessna172)
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` specifying if the configuration is
    ///              hardcoded (`Programmed`) or loaded from a file (`File`).
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    /// Creates an aircraft configuration for predefined (programmed) types.
    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Cessna172 => Self {
                name: "Cessna172".to_string(),
                ac_type: AircraftType::Cessna172,
                mass: MassModel::cessna_172(),
                geometry: AircraftGeometry::cessna_172(),
                aero_coef: AircraftAeroCoefficients::cessna_172(),
                propulsion: PropulsionConfig::cessna_172(),
            },
            AircraftType::Custom(string) => Self {
                name: string.clone(),
                ac_type: AircraftType::Custom(string),
                mass: MassModel::cessna_172(),
                geometry: AircraftGeometry::cessna_172(),
                aero_coef: AircraftAeroCoefficients::cessna_172(),
                propulsion: PropulsionConfig::cessna_172(),
            },
        }
    }

    /// Creates an aircraft configuration by reading a flat YAML profile.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        let raw_config: RawAircraftConfig = serde_yaml::from_str(&file_contents)?;
        Self::from_raw_config(raw_config)
    }

    /// Converts a raw flat configuration into the structured form.
    fn from_raw_config(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        raw.validate()?;
        debug!("loaded aircraft profile '{}'", raw.name);
        Ok(Self {
            name: raw.name.clone(),
            ac_type: AircraftType::Custom(raw.name.clone()),
            mass: MassModel::new(raw.mass, raw.ixx, raw.iyy, raw.izz, raw.ixz),
            geometry: AircraftGeometry::new(raw.wing_area, raw.wing_span, raw.mac),
            aero_coef: AircraftAeroCoefficients::from_raw(&raw)?,
            propulsion: PropulsionConfig::new(raw.max_thrust),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_cessna_172() {
        let config = AircraftConfig::default();
        let programmed =
            AircraftConfig::new(AircraftSource::Programmed(AircraftType::Cessna172)).unwrap();

        assert_eq!(config.ac_type, AircraftType::Cessna172);
        assert_eq!(programmed.ac_type, config.ac_type);
        assert_eq!(programmed.name, config.name);
        assert_relative_eq!(config.mass.mass, 1043.0);
        assert_relative_eq!(config.geometry.wing_area, 16.2);
        assert_relative_eq!(config.propulsion.max_thrust, 2000.0);
        assert_relative_eq!(config.aero_coef.lift.c_l_0, 0.28);
    }

    #[test]
    fn test_from_yaml_profile() {
        let yaml = r#"
name: TestPlane
mass: 1200.0
ixx: 1300.0
iyy: 1900.0
izz: 2700.0
ixz: 0.0
wing_area: 17.0
wing_span: 11.5
mac: 1.5
max_thrust: 2200.0
c_L_0: 0.3
c_L_alpha: 4.5
c_L_deltae: 0.35
c_D_0: 0.03
k: 0.05
c_Y_beta: -0.4
c_Y_deltar: 0.19
c_l_beta: -0.07
c_l_deltaa: 0.18
c_l_deltar: 0.015
c_l_p: -0.48
c_m_0: 0.04
c_m_alpha: -0.6
c_m_deltae: -1.1
c_m_q: -12.0
c_n_beta: 0.07
c_n_deltaa: -0.05
c_n_deltar: -0.08
c_n_r: -0.12
"#;
        let raw: RawAircraftConfig = serde_yaml::from_str(yaml).unwrap();
        let config = AircraftConfig::from_raw_config(raw).unwrap();

        assert_eq!(config.name, "TestPlane");
        assert_relative_eq!(config.mass.mass, 1200.0);
        assert_relative_eq!(config.aero_coef.pitch.c_m_q, -12.0);
        assert_relative_eq!(config.propulsion.max_thrust, 2200.0);
    }

    #[test]
    fn test_validation_rejects_nonpositive_mass() {
        let yaml = r#"
name: Broken
mass: 0.0
ixx: 1300.0
iyy: 1900.0
izz: 2700.0
ixz: 0.0
wing_area: 17.0
wing_span: 11.5
mac: 1.5
max_thrust: 2200.0
c_L_0: 0.3
c_L_alpha: 4.5
c_L_deltae: 0.35
c_D_0: 0.03
k: 0.05
c_Y_beta: -0.4
c_Y_deltar: 0.19
c_l_beta: -0.07
c_l_deltaa: 0.18
c_l_deltar: 0.015
c_l_p: -0.48
c_m_0: 0.04
c_m_alpha: -0.6
c_m_deltae: -1.1
c_m_q: -12.0
c_n_beta: 0.07
c_n_deltaa: -0.05
c_n_deltar: -0.08
c_n_r: -0.12
"#;
        let raw: RawAircraftConfig = serde_yaml::from_str(yaml).unwrap();
        let result = AircraftConfig::from_raw_config(raw);

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
