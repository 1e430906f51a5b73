use serde::{Deserialize, Serialize};

/// ISA (International Standard Atmosphere) constants.
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15; // K
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m³
pub const TEMPERATURE_LAPSE_RATE: f64 = 0.0065; // K/m
pub const GAS_CONSTANT: f64 = 287.05; // J/(kg·K)
pub const GAMMA: f64 = 1.4; // Specific heat ratio
pub const GRAVITY: f64 = 9.80665; // m/s²

/// Altitude of the tropopause, the top of the linear-lapse layer (m).
const TROPOPAUSE_ALTITUDE: f64 = 11000.0;
/// Constant temperature of the lower stratosphere (K).
const TROPOPAUSE_TEMPERATURE: f64 = 216.65;

/// Atmospheric state at a given altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericProperties {
    /// Air density (kg/m³).
    pub density: f64,
    /// Static pressure (Pa).
    pub pressure: f64,
    /// Temperature (K).
    pub temperature: f64,
    /// Speed of sound (m/s).
    pub speed_of_sound: f64,
}

/// Two-layer ISA model: linear temperature lapse through the troposphere,
/// isothermal exponential pressure decay above the 11 km tropopause.
/// Stateless beyond the documented constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atmosphere;

impl Atmosphere {
    pub fn new() -> Self {
        Self
    }

    /// Atmospheric properties at the given altitude (m).
    ///
    /// Negative altitudes are clamped to sea level. Altitudes far above
    /// the stratospheric layer stay numerically stable but the two-layer
    /// model is no longer physically representative there.
    pub fn properties(&self, altitude: f64) -> AtmosphericProperties {
        let altitude = altitude.max(0.0);

        let (temperature, pressure) = if altitude <= TROPOPAUSE_ALTITUDE {
            let temperature = SEA_LEVEL_TEMPERATURE - TEMPERATURE_LAPSE_RATE * altitude;
            let pressure = SEA_LEVEL_PRESSURE
                * (temperature / SEA_LEVEL_TEMPERATURE).powf(Self::barometric_exponent());
            (temperature, pressure)
        } else {
            let temperature = TROPOPAUSE_TEMPERATURE;
            let pressure = Self::tropopause_pressure()
                * (-GRAVITY * (altitude - TROPOPAUSE_ALTITUDE) / (GAS_CONSTANT * temperature))
                    .exp();
            (temperature, pressure)
        };

        let density = pressure / (GAS_CONSTANT * temperature);
        let speed_of_sound = (GAMMA * GAS_CONSTANT * temperature).sqrt();

        AtmosphericProperties {
            density,
            pressure,
            temperature,
            speed_of_sound,
        }
    }

    fn barometric_exponent() -> f64 {
        GRAVITY / (TEMPERATURE_LAPSE_RATE * GAS_CONSTANT)
    }

    /// Pressure at exactly 11 km from the tropospheric formula, so the
    /// piecewise layers join without a seam.
    fn tropopause_pressure() -> f64 {
        let t11 = SEA_LEVEL_TEMPERATURE - TEMPERATURE_LAPSE_RATE * TROPOPAUSE_ALTITUDE;
        SEA_LEVEL_PRESSURE * (t11 / SEA_LEVEL_TEMPERATURE).powf(Self::barometric_exponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sea_level_properties() {
        let atmosphere = Atmosphere::new();
        let properties = atmosphere.properties(0.0);

        assert_relative_eq!(properties.pressure, SEA_LEVEL_PRESSURE);
        assert_relative_eq!(properties.temperature, SEA_LEVEL_TEMPERATURE);
        assert_relative_eq!(properties.density, SEA_LEVEL_DENSITY, epsilon = 1e-3);
        assert_relative_eq!(properties.speed_of_sound, 340.29, epsilon = 0.01);
    }

    #[test]
    fn test_negative_altitude_clamped_to_sea_level() {
        let atmosphere = Atmosphere::new();
        assert_eq!(atmosphere.properties(-500.0), atmosphere.properties(0.0));
    }

    #[test]
    fn test_density_decreases_with_altitude() {
        let atmosphere = Atmosphere::new();
        let altitudes = [0.0, 1000.0, 5000.0, 10000.0, 15000.0, 20000.0];

        for pair in altitudes.windows(2) {
            let lower = atmosphere.properties(pair[0]);
            let upper = atmosphere.properties(pair[1]);
            assert!(
                upper.density < lower.density,
                "density should decrease from {} m to {} m",
                pair[0],
                pair[1]
            );
            assert!(upper.pressure < lower.pressure);
        }
    }

    #[test]
    fn test_continuity_at_tropopause() {
        let atmosphere = Atmosphere::new();
        let below = atmosphere.properties(11000.0);
        let above = atmosphere.properties(11000.0 + 1e-6);

        assert_relative_eq!(below.temperature, 216.65, epsilon = 1e-9);
        assert_relative_eq!(above.temperature, below.temperature, epsilon = 1e-9);
        assert_relative_eq!(above.pressure, below.pressure, max_relative = 1e-9);
        assert_relative_eq!(above.density, below.density, max_relative = 1e-9);
    }

    #[test]
    fn test_stratosphere_is_isothermal() {
        let atmosphere = Atmosphere::new();
        let at_12km = atmosphere.properties(12000.0);
        let at_18km = atmosphere.properties(18000.0);

        assert_relative_eq!(at_12km.temperature, 216.65);
        assert_relative_eq!(at_18km.temperature, 216.65);
        assert_relative_eq!(at_12km.speed_of_sound, at_18km.speed_of_sound);
        assert!(at_18km.pressure < at_12km.pressure);
    }

    #[test]
    fn test_extreme_altitude_stays_finite() {
        let atmosphere = Atmosphere::new();
        let properties = atmosphere.properties(1.0e6);

        assert!(properties.density.is_finite());
        assert!(properties.density > 0.0);
        assert!(properties.pressure.is_finite());
    }
}
