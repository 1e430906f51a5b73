use serde::{Deserialize, Serialize};

/// Stability and control derivatives for the aircraft, grouped by the force
/// or moment they contribute to. All values are non-dimensional, per radian
/// where angle-dependent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftAeroCoefficients {
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
    pub side_force: SideForceCoefficients,
    pub roll: RollCoefficients,
    pub pitch: PitchCoefficients,
    pub yaw: YawCoefficients,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftCoefficients {
    pub c_l_0: f64,
    pub c_l_alpha: f64,
    pub c_l_deltae: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragCoefficients {
    pub c_d_0: f64,
    /// Induced drag factor K in the parabolic polar CD = CD0 + K·CL².
    pub k: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideForceCoefficients {
    pub c_y_beta: f64,
    pub c_y_deltar: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollCoefficients {
    pub c_l_beta: f64,
    pub c_l_deltaa: f64,
    pub c_l_deltar: f64,
    /// Roll damping derivative, applied to the non-dimensional roll rate p̂.
    pub c_l_p: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchCoefficients {
    pub c_m_0: f64,
    pub c_m_alpha: f64,
    pub c_m_deltae: f64,
    /// Pitch damping derivative, applied to the non-dimensional pitch rate q̂.
    pub c_m_q: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YawCoefficients {
    pub c_n_beta: f64,
    pub c_n_deltaa: f64,
    pub c_n_deltar: f64,
    /// Yaw damping derivative, applied to the non-dimensional yaw rate r̂.
    pub c_n_r: f64,
}

impl AircraftAeroCoefficients {
    /// Lift coefficient CL(α, δe), linear in both terms.
    pub fn c_l(&self, alpha: f64, elevator: f64) -> f64 {
        self.lift.c_l_0 + self.lift.c_l_alpha * alpha + self.lift.c_l_deltae * elevator
    }

    /// Drag coefficient CD(α) from the parabolic polar CD0 + K·CL².
    ///
    /// The lift term is evaluated at the aircraft's stored elevator trim,
    /// not at any elevator deflection paired with `alpha` elsewhere; drag
    /// is deliberately insensitive to the elevator argument used for lift.
    pub fn c_d(&self, alpha: f64, trim_elevator: f64) -> f64 {
        let c_l = self.c_l(alpha, trim_elevator);
        self.drag.c_d_0 + self.drag.k * c_l * c_l
    }

    /// Side-force coefficient CY(β, δr).
    pub fn c_y(&self, beta: f64, rudder: f64) -> f64 {
        self.side_force.c_y_beta * beta + self.side_force.c_y_deltar * rudder
    }

    /// Rolling moment coefficient Cl(β, δa, δr) with roll damping from p̂.
    pub fn c_l_roll(&self, beta: f64, aileron: f64, rudder: f64, p_hat: f64) -> f64 {
        self.roll.c_l_beta * beta
            + self.roll.c_l_deltaa * aileron
            + self.roll.c_l_deltar * rudder
            + self.roll.c_l_p * p_hat
    }

    /// Pitching moment coefficient Cm(α, δe) with pitch damping from q̂.
    pub fn c_m(&self, alpha: f64, elevator: f64, q_hat: f64) -> f64 {
        self.pitch.c_m_0
            + self.pitch.c_m_alpha * alpha
            + self.pitch.c_m_deltae * elevator
            + self.pitch.c_m_q * q_hat
    }

    /// Yawing moment coefficient Cn(β, δa, δr) with yaw damping from r̂.
    pub fn c_n(&self, beta: f64, aileron: f64, rudder: f64, r_hat: f64) -> f64 {
        self.yaw.c_n_beta * beta
            + self.yaw.c_n_deltaa * aileron
            + self.yaw.c_n_deltar * rudder
            + self.yaw.c_n_r * r_hat
    }

    pub fn cessna_172() -> Self {
        Self {
            lift: LiftCoefficients {
                c_l_0: 0.28,
                c_l_alpha: 4.58,
                c_l_deltae: 0.36,
            },
            drag: DragCoefficients {
                c_d_0: 0.027,
                k: 0.045,
            },
            side_force: SideForceCoefficients {
                c_y_beta: -0.393,
                c_y_deltar: 0.187,
            },
            roll: RollCoefficients {
                c_l_beta: -0.074,
                c_l_deltaa: 0.178,
                c_l_deltar: 0.0147,
                c_l_p: -0.484,
            },
            pitch: PitchCoefficients {
                c_m_0: 0.04,
                c_m_alpha: -0.613,
                c_m_deltae: -1.122,
                c_m_q: -12.4,
            },
            yaw: YawCoefficients {
                c_n_beta: 0.071,
                c_n_deltaa: -0.0504,
                c_n_deltar: -0.0805,
                c_n_r: -0.125,
            },
        }
    }
}
