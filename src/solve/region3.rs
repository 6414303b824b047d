//! Density goal-seek for region 3, where the equation of state is explicit
//! in (ρ, T) and pressure is an output.

use crate::{
    error::SteamError,
    if97::{self, PropertySet, boundary, region1, region2},
};

const PRESSURE_TOLERANCE: f64 = 1e-10;
const BISECTION_STEPS: u32 = 4;
const MAX_ITERATIONS: u32 = 50;

/// Finds the region 3 property set whose pressure matches the target.
///
/// The density is bracketed between the region 1 liquid density at 623.15 K
/// and the region 2 gas density at the B23 temperature, both at the target
/// pressure. A few bisection steps shrink the bracket, then a secant
/// iteration finishes the job. If two successive test pressures coincide the
/// secant has no more resolution to extract and the current estimate is
/// returned as converged.
///
/// # Errors
///
/// Returns [`SteamError::ConvergenceFailure`] carrying the best density
/// estimate if the pressure residual still exceeds the tolerance after the
/// iteration cap.
pub(crate) fn properties(pressure: f64, temperature: f64) -> Result<PropertySet, SteamError> {
    let mut density_a = region1::properties(pressure, if97::TEMPERATURE_B13).density;
    let mut density_b =
        region2::properties(pressure, boundary::b23_temperature(pressure)?).density;
    let mut test_a = if97::region3::properties(density_a, temperature).pressure;
    let mut test_b = if97::region3::properties(density_b, temperature).pressure;

    let mut props = if97::region3::properties(0.5 * (density_a + density_b), temperature);
    for _ in 0..BISECTION_STEPS {
        if pressure > props.pressure {
            density_b = props.density;
            test_b = props.pressure;
        } else {
            density_a = props.density;
            test_a = props.pressure;
        }
        props = if97::region3::properties(0.5 * (density_a + density_b), temperature);
    }

    let mut iterations = 0;
    while (props.pressure - pressure).abs() > PRESSURE_TOLERANCE && test_a != test_b {
        if iterations == MAX_ITERATIONS {
            return Err(SteamError::ConvergenceFailure {
                context: format!("region 3 density at {pressure} MPa, {temperature} K"),
                best_estimate: props.density,
                iterations,
            });
        }
        iterations += 1;

        let slope = (density_a - density_b) / (test_a - test_b);
        let density = density_a + (pressure - test_a) * slope;
        density_b = density_a;
        test_b = test_a;
        props = if97::region3::properties(density, temperature);
        density_a = props.density;
        test_a = props.pressure;
    }
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    // Inverts the (ρ, T) verification points of IAPWS-IF97 Table 33.
    #[test]
    fn recovers_table_densities_from_pressure() {
        let a = properties(25.5837018, 650.0).unwrap();
        assert_relative_eq!(a.density, 500.0, max_relative = 1e-6);
        assert_relative_eq!(a.enthalpy, 0.186343019e4, max_relative = 1e-6);

        let b = properties(78.3095639, 750.0).unwrap();
        assert_relative_eq!(b.density, 500.0, max_relative = 1e-6);
        assert_relative_eq!(b.entropy, 0.446971906e1, max_relative = 1e-6);
    }

    #[test]
    fn solved_pressure_matches_the_target() {
        let props = properties(30.0, 680.0).unwrap();
        assert_relative_eq!(props.pressure, 30.0, epsilon = 1e-9);
        assert_relative_eq!(props.temperature, 680.0);
    }
}
