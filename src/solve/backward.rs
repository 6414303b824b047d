//! Secant refinement of the backward temperature correlations.
//!
//! The polynomial backward correlations are only accurate to around 25 mK.
//! Re-evaluating the forward equation at the correlated temperature and
//! extrapolating linearly toward the target recovers close to full forward
//! precision in two passes.

use crate::{
    error::SteamError,
    if97::{self, PropertySet, boundary, region1, region2},
    solve::region3,
};

const REGION3_TOLERANCE: f64 = 1e-6;
const REGION3_MAX_ITERATIONS: u32 = 15;

/// The coordinate a backward correlation inverts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Enthalpy,
    Entropy,
}

impl Target {
    pub(crate) fn extract(self, props: &PropertySet) -> f64 {
        match self {
            Target::Enthalpy => props.enthalpy,
            Target::Entropy => props.entropy,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Target::Enthalpy => "enthalpy",
            Target::Entropy => "entropy",
        }
    }
}

/// Refines a backward-correlation temperature against the forward equation.
///
/// `correlation` seeds the first test point; a second seed comes from
/// feeding the forward result back through the correlation. Two linear
/// extrapolations toward the target value then pin the temperature down.
pub(crate) fn refined_temperature(
    forward: impl Fn(f64, f64) -> PropertySet,
    correlation: impl Fn(f64, f64) -> f64,
    target: Target,
    pressure: f64,
    value: f64,
) -> f64 {
    let point = |temperature: f64| {
        (
            target.extract(&forward(pressure, temperature)),
            temperature,
        )
    };

    let point_a = point(correlation(pressure, value));
    let point_b = point(correlation(pressure, point_a.0));
    let temperature = linear_test_point(value, point_a, point_b);

    let point_a = point(temperature);
    linear_test_point(value, point_a, point_b)
}

/// Goal-seeks a region 3 temperature for a target enthalpy or entropy.
///
/// Region 3 has no backward correlation, so the search starts from the
/// bracketing values on the region 1 and region 2 sides and walks a secant
/// through density-solved region 3 states.
///
/// # Errors
///
/// Returns [`SteamError::ConvergenceFailure`] carrying the best temperature
/// estimate if successive estimates still disagree after the iteration cap,
/// and propagates failures from the density solve at any test temperature.
pub(crate) fn region3_temperature(
    target: Target,
    pressure: f64,
    value: f64,
) -> Result<f64, SteamError> {
    let point_a = (
        target.extract(&region1::properties(pressure, if97::TEMPERATURE_B13)),
        if97::TEMPERATURE_B13,
    );
    let boundary_temperature = boundary::b23_temperature(pressure)?;
    let point_b = (
        target.extract(&region2::properties(pressure, boundary_temperature)),
        boundary_temperature,
    );
    converge_temperature(
        value,
        point_a,
        point_b,
        |temperature| Ok(target.extract(&region3::properties(pressure, temperature)?)),
        || format!("region 3 temperature for {} {value} at {pressure} MPa", target.label()),
    )
}

/// The secant loop behind [`region3_temperature`], generic over the forward
/// evaluation so the termination behavior can be tested in isolation.
fn converge_temperature(
    value: f64,
    mut point_a: (f64, f64),
    mut point_b: (f64, f64),
    mut eval: impl FnMut(f64) -> Result<f64, SteamError>,
    context: impl FnOnce() -> String,
) -> Result<f64, SteamError> {
    let mut temperature = point_a.1;
    let mut next = linear_test_point(value, point_a, point_b);

    let mut iterations = 0;
    while (temperature - next).abs() > REGION3_TOLERANCE && iterations < REGION3_MAX_ITERATIONS {
        iterations += 1;
        point_a = point_b;
        point_b = (eval(next)?, next);
        temperature = next;
        next = linear_test_point(value, point_a, point_b);
    }
    if (temperature - next).abs() > REGION3_TOLERANCE {
        return Err(SteamError::ConvergenceFailure {
            context: context(),
            best_estimate: next,
            iterations,
        });
    }
    Ok(next)
}

/// Linear extrapolation of `x` through two (value, temperature) points.
///
/// A degenerate pair with equal values yields slope zero rather than an
/// error, collapsing the extrapolation onto the intercept.
fn linear_test_point(x: f64, point1: (f64, f64), point2: (f64, f64)) -> f64 {
    let slope = if point1.0 == point2.0 {
        0.0
    } else {
        (point1.1 - point2.1) / (point1.0 - point2.0)
    };
    x * slope + (point1.1 - slope * point1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn refinement_recovers_the_forward_temperature() {
        // Forward values from IAPWS-IF97 Tables 5 and 15.
        let t = refined_temperature(
            region1::properties,
            region1::temperature_ph,
            Target::Enthalpy,
            3.0,
            115.331273,
        );
        assert_relative_eq!(t, 300.0, epsilon = 1e-5);

        let t = refined_temperature(
            region2::properties,
            region2::temperature_ps_2a,
            Target::Entropy,
            0.0035,
            9.15546997,
        );
        assert_relative_eq!(t, 700.0, epsilon = 1e-5);
    }

    #[test]
    fn region3_search_recovers_the_forward_temperature() {
        // ρ = 500 kg/m³, T = 650 K from IAPWS-IF97 Table 33.
        let t = region3_temperature(Target::Enthalpy, 25.5837018, 1863.43019).unwrap();
        assert_relative_eq!(t, 650.0, epsilon = 1e-4);

        let t = region3_temperature(Target::Entropy, 25.5837018, 4.85438792).unwrap();
        assert_relative_eq!(t, 650.0, epsilon = 1e-4);
    }

    #[test]
    fn degenerate_points_fall_back_to_the_intercept() {
        assert_relative_eq!(linear_test_point(5.0, (2.0, 400.0), (2.0, 410.0)), 400.0);
    }

    #[test]
    fn cap_exhaustion_reports_convergence_failure() {
        // Forward values that oscillate between two levels keep the secant
        // estimates from ever settling, so the iteration cap must trip.
        let calls = std::cell::Cell::new(0u32);
        let result = converge_temperature(
            10.0,
            (0.0, 600.0),
            (1.0, 700.0),
            |_| {
                calls.set(calls.get() + 1);
                Ok(if calls.get() % 2 == 0 { 0.0 } else { 1.0 })
            },
            || "oscillating target".into(),
        );
        match result {
            Err(SteamError::ConvergenceFailure {
                iterations,
                best_estimate,
                ..
            }) => {
                assert_eq!(iterations, REGION3_MAX_ITERATIONS);
                assert!(best_estimate.is_finite());
            }
            other => panic!("expected a convergence failure, got {other:?}"),
        }
    }
}
