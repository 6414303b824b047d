//! Region 4: the saturation curve between the triple point and the critical
//! point.
//!
//! The saturation-pressure equation (IAPWS-IF97 eq. 30) is an implicit
//! quadratic whose closed-form solution also inverts exactly, so both
//! directions are non-iterative and mutual inverses to machine precision.

use crate::error::SteamError;

use super::{CRITICAL_PRESSURE, CRITICAL_TEMPERATURE, TEMPERATURE_MIN};

// Coefficients n1..n10 from IAPWS-IF97 Table 34.
const N: [f64; 10] = [
    1167.0521452767,
    -724213.16703206,
    -17.073846940092,
    12020.82470247,
    -3232555.0322333,
    14.91510861353,
    -4823.2657361591,
    405113.40542057,
    -0.23855557567849,
    650.17534844798,
];

/// Saturation pressure at `temperature`, MPa.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] for temperatures outside
/// `[273.15, 647.096] K`.
pub fn saturation_pressure(temperature: f64) -> Result<f64, SteamError> {
    if !(TEMPERATURE_MIN..=CRITICAL_TEMPERATURE).contains(&temperature) {
        return Err(SteamError::out_of_domain(format!(
            "saturation pressure is undefined at {temperature} K"
        )));
    }

    let theta = temperature + N[8] / (temperature - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    Ok((2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4))
}

/// Saturation temperature at `pressure`, K.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] for pressures above the critical
/// pressure or at or below zero.
pub fn saturation_temperature(pressure: f64) -> Result<f64, SteamError> {
    if pressure <= 0.0 || pressure > CRITICAL_PRESSURE {
        return Err(SteamError::out_of_domain(format!(
            "saturation temperature is undefined at {pressure} MPa"
        )));
    }

    let beta = pressure.powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    Ok((N[9] + d - ((N[9] + d) * (N[9] + d) - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    // Reference values from IAPWS-IF97 Table 35.
    #[test]
    fn saturation_pressure_matches_verification_table() {
        assert_relative_eq!(
            saturation_pressure(300.0).unwrap(),
            0.353658941e-2,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            saturation_pressure(500.0).unwrap(),
            0.263889776e1,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            saturation_pressure(600.0).unwrap(),
            0.123443146e2,
            max_relative = 1e-8
        );
    }

    // Reference values from IAPWS-IF97 Table 36.
    #[test]
    fn saturation_temperature_matches_verification_table() {
        assert_relative_eq!(
            saturation_temperature(0.1).unwrap(),
            0.372755919e3,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            saturation_temperature(1.0).unwrap(),
            0.453035632e3,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            saturation_temperature(10.0).unwrap(),
            0.584149488e3,
            max_relative = 1e-8
        );
    }

    #[test]
    fn directions_are_mutual_inverses() {
        for &p in &[0.01, 0.101325, 1.0, 10.0, 16.5291643, 22.0] {
            let t = saturation_temperature(p).unwrap();
            assert_relative_eq!(saturation_pressure(t).unwrap(), p, max_relative = 1e-9);
        }
    }

    #[test]
    fn rejects_inputs_beyond_the_critical_point() {
        assert!(saturation_pressure(700.0).is_err());
        assert!(saturation_pressure(200.0).is_err());
        assert!(saturation_temperature(25.0).is_err());
        assert!(saturation_temperature(0.0).is_err());
    }
}
