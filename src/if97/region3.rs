//! Region 3: the dense near-critical region, 623.15 K ≤ T and p above the
//! B23 boundary, up to 100 MPa.
//!
//! Unlike regions 1 and 2, the equation of state here is a Helmholtz free
//! energy φ(δ, τ) explicit in density and temperature (IAPWS-IF97 Table 30),
//! so pressure is an output rather than an input. Recovering properties at a
//! target (p, T) requires the crate's iterative density solve. There is no
//! native backward correlation for this region.

use super::{CRITICAL_DENSITY, CRITICAL_TEMPERATURE, GAS_CONSTANT, PropertySet};

const I: [i32; 40] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 6,
    6, 6, 7, 8, 9, 9, 10, 10, 11,
];
const J: [i32; 40] = [
    0, 0, 1, 2, 7, 10, 12, 23, 2, 6, 15, 17, 0, 2, 6, 7, 22, 26, 0, 2, 4, 16, 26, 0, 2, 4, 26, 1,
    3, 26, 0, 2, 26, 2, 26, 2, 26, 0, 1, 26,
];
const N: [f64; 40] = [
    1.0658070028513,
    -15.732845290239,
    20.944396974307,
    -7.6867707878716,
    2.6185947787954,
    -2.808078114862,
    1.2053369696517,
    -8.4566812812502e-3,
    -1.2654315477714,
    -1.1524407806681,
    0.88521043984318,
    -0.64207765181607,
    0.38493460186671,
    -0.85214708824206,
    4.8972281541877,
    -3.0502617256965,
    0.039420536879154,
    0.12558408424308,
    -0.2799932969871,
    1.389979956946,
    -2.018991502357,
    -8.2147637173963e-3,
    -0.47596035734923,
    0.0439840744735,
    -0.44476435428739,
    0.90572070719733,
    0.70522450087967,
    0.10770512626332,
    -0.32913623258954,
    -0.50871062041158,
    -0.022175400873096,
    0.094260751665092,
    0.16436278447961,
    -0.013503372241348,
    -0.014834345352472,
    5.7922953628084e-4,
    3.2308904703711e-3,
    8.0964802996215e-5,
    -1.6557679795037e-4,
    -4.4923899061815e-5,
];

/// Evaluates the full region 3 property set at (ρ, T).
///
/// Pressure is computed from the equation of state; the returned set is the
/// state at exactly this density and temperature.
pub fn properties(density: f64, temperature: f64) -> PropertySet {
    let delta = density / CRITICAL_DENSITY;
    let tau = CRITICAL_TEMPERATURE / temperature;

    let mut phi = N[0] * delta.ln();
    let mut phi_delta = N[0] / delta;
    let mut phi_tau = 0.0;
    for i in 1..40 {
        let d_term = delta.powi(I[i]);
        let t_term = tau.powi(J[i]);
        phi += N[i] * d_term * t_term;
        phi_delta += N[i] * f64::from(I[i]) * delta.powi(I[i] - 1) * t_term;
        phi_tau += N[i] * d_term * f64::from(J[i]) * tau.powi(J[i] - 1);
    }

    let rt = GAS_CONSTANT * temperature;
    PropertySet {
        pressure: density * rt * delta * phi_delta / 1000.0,
        temperature,
        specific_volume: 1.0 / density,
        density,
        internal_energy: rt * tau * phi_tau,
        enthalpy: rt * (tau * phi_tau + delta * phi_delta),
        entropy: GAS_CONSTANT * (tau * phi_tau - phi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    // Reference values from IAPWS-IF97 Table 33.
    #[test]
    fn forward_matches_verification_table() {
        let a = properties(500.0, 650.0);
        assert_relative_eq!(a.pressure, 0.255837018e2, max_relative = 1e-8);
        assert_relative_eq!(a.enthalpy, 0.186343019e4, max_relative = 1e-8);
        assert_relative_eq!(a.entropy, 0.485438792e1, max_relative = 1e-8);
        assert_relative_eq!(a.internal_energy, 0.181226279e4, max_relative = 1e-8);

        let b = properties(200.0, 650.0);
        assert_relative_eq!(b.pressure, 0.222930643e2, max_relative = 1e-8);
        assert_relative_eq!(b.enthalpy, 0.237512401e4, max_relative = 1e-8);
        assert_relative_eq!(b.entropy, 0.540677010e1, max_relative = 1e-8);

        let c = properties(500.0, 750.0);
        assert_relative_eq!(c.pressure, 0.783095639e2, max_relative = 1e-8);
        assert_relative_eq!(c.enthalpy, 0.225868845e4, max_relative = 1e-8);
        assert_relative_eq!(c.entropy, 0.446971906e1, max_relative = 1e-8);
    }

    #[test]
    fn specific_volume_is_reciprocal_of_density() {
        let props = properties(431.0, 640.0);
        assert_relative_eq!(props.density * props.specific_volume, 1.0);
    }
}
