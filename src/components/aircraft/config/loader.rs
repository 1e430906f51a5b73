use serde::Deserialize;
use thiserror::Error;

use crate::components::aircraft::config::aero_coef::{
    AircraftAeroCoefficients, DragCoefficients, LiftCoefficients, PitchCoefficients,
    RollCoefficients, SideForceCoefficients, YawCoefficients,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// The flat on-disk representation of an aircraft profile. Field names
/// follow the aerodynamics convention (capital letters for force
/// coefficients, lowercase for moments), hence the lint allowance.
#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Mass properties
    pub mass: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    pub ixz: f64,

    /// Geometry
    pub wing_area: f64,
    pub wing_span: f64,
    pub mac: f64,

    /// Propulsion
    pub max_thrust: f64,

    /// Lift coefficients
    pub c_L_0: f64,
    pub c_L_alpha: f64,
    pub c_L_deltae: f64,

    /// Drag polar
    pub c_D_0: f64,
    pub k: f64,

    /// Side-force coefficients
    pub c_Y_beta: f64,
    pub c_Y_deltar: f64,

    /// Roll coefficients
    pub c_l_beta: f64,
    pub c_l_deltaa: f64,
    pub c_l_deltar: f64,
    pub c_l_p: f64,

    /// Pitch coefficients
    pub c_m_0: f64,
    pub c_m_alpha: f64,
    pub c_m_deltae: f64,
    pub c_m_q: f64,

    /// Yaw coefficients
    pub c_n_beta: f64,
    pub c_n_deltaa: f64,
    pub c_n_deltar: f64,
    pub c_n_r: f64,
}

impl RawAircraftConfig {
    /// Rejects profiles whose physical parameters cannot drive the
    /// equations of motion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mass <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if self.wing_area <= 0.0 || self.wing_span <= 0.0 || self.mac <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "geometry must be positive: wing_area={}, wing_span={}, mac={}",
                self.wing_area, self.wing_span, self.mac
            )));
        }
        if self.max_thrust < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "max_thrust must be non-negative, got {}",
                self.max_thrust
            )));
        }
        Ok(())
    }
}

impl AircraftAeroCoefficients {
    pub fn from_raw(raw: &RawAircraftConfig) -> Result<Self, ConfigError> {
        Ok(AircraftAeroCoefficients {
            lift: LiftCoefficients {
                c_l_0: raw.c_L_0,
                c_l_alpha: raw.c_L_alpha,
                c_l_deltae: raw.c_L_deltae,
            },
            drag: DragCoefficients {
                c_d_0: raw.c_D_0,
                k: raw.k,
            },
            side_force: SideForceCoefficients {
                c_y_beta: raw.c_Y_beta,
                c_y_deltar: raw.c_Y_deltar,
            },
            roll: RollCoefficients {
                c_l_beta: raw.c_l_beta,
                c_l_deltaa: raw.c_l_deltaa,
                c_l_deltar: raw.c_l_deltar,
                c_l_p: raw.c_l_p,
            },
            pitch: PitchCoefficients {
                c_m_0: raw.c_m_0,
                c_m_alpha: raw.c_m_alpha,
                c_m_deltae: raw.c_m_deltae,
                c_m_q: raw.c_m_q,
            },
            yaw: YawCoefficients {
                c_n_beta: raw.c_n_beta,
                c_n_deltaa: raw.c_n_deltaa,
                c_n_deltar: raw.c_n_deltar,
                c_n_r: raw.c_n_r,
            },
        })
    }
}
