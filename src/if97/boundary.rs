//! The B23 boundary separating regions 2 and 3.
//!
//! A simple quadratic in temperature (IAPWS-IF97 eq. 5) with an exact
//! closed-form inverse (eq. 6); the two directions are mutual inverses over
//! 623.15 K ≤ T ≤ 863.15 K (16.5292 MPa ≤ p ≤ 100 MPa).

use crate::error::SteamError;

// Coefficients n1..n5 from IAPWS-IF97 Table 1.
const N1: f64 = 348.05185628969;
const N2: f64 = -1.1671859879975;
const N3: f64 = 1.0192970039326e-3;
const N4: f64 = 572.54459862746;
const N5: f64 = 13.91883977887;

/// Boundary pressure at `temperature`, MPa.
pub fn b23_pressure(temperature: f64) -> f64 {
    N1 + N2 * temperature + N3 * temperature * temperature
}

/// Boundary temperature at `pressure`, K.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] for pressures below the low end of
/// the curve (≈13.92 MPa), where the inverse is undefined.
pub fn b23_temperature(pressure: f64) -> Result<f64, SteamError> {
    if pressure < N5 {
        return Err(SteamError::out_of_domain(format!(
            "the region 2/3 boundary is undefined at {pressure} MPa"
        )));
    }
    Ok(N4 + ((pressure - N5) / N3).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    // Reference point from IAPWS-IF97 section 4 (T = 623.15 K, p = 16.5291643 MPa).
    #[test]
    fn matches_verification_point() {
        assert_relative_eq!(b23_pressure(623.15), 0.165291643e2, max_relative = 1e-8);
        assert_relative_eq!(
            b23_temperature(16.5291643).unwrap(),
            0.62315e3,
            max_relative = 1e-8
        );
    }

    #[test]
    fn directions_are_mutual_inverses() {
        for &t in &[623.15, 700.0, 800.0, 863.15] {
            let p = b23_pressure(t);
            assert_relative_eq!(b23_temperature(p).unwrap(), t, max_relative = 1e-9);
        }
    }

    #[test]
    fn rejects_pressures_below_the_curve() {
        assert!(b23_temperature(10.0).is_err());
    }
}
