//! Public property queries over every supported input pair.

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, ThermodynamicTemperature},
    pressure::megapascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    error::SteamError,
    if97::{self, PropertySet, boundary, region1, region2},
    region::region_select,
    saturation,
    solve::{
        backward::{self, Target},
        region3,
    },
    state::{Phase, Region, ThermodynamicState},
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Properties at a pressure and temperature.
///
/// The region is selected from the input pair; region 3 goes through the
/// iterative density solve. Points on the saturation curve resolve to the
/// liquid side.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] outside `(0, 100] MPa` ×
/// `[273.15, 1073.15] K`, and [`SteamError::ConvergenceFailure`] if the
/// region 3 density solve stalls.
pub fn properties_pt(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<ThermodynamicState, SteamError> {
    let (props, phase, region) = raw_pt(
        pressure.get::<megapascal>(),
        temperature.get::<kelvin>(),
    )?;
    Ok(ThermodynamicState::single_phase(&props, phase, region))
}

/// Properties at a pressure and specific enthalpy.
///
/// Resolves to a compressed-liquid, superheated-gas, dense region 3, or
/// two-phase state depending on where the enthalpy falls at this pressure.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] if the enthalpy is outside the range
/// reachable at this pressure (see [`enthalpy_range_by_pressure`]).
pub fn properties_ph(
    pressure: Pressure,
    enthalpy: SpecificEnthalpy,
) -> Result<ThermodynamicState, SteamError> {
    resolve(
        pressure.get::<megapascal>(),
        enthalpy.get::<kilojoule_per_kilogram>(),
        Target::Enthalpy,
    )
}

/// Properties at a pressure and specific entropy.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] if the entropy is outside the range
/// reachable at this pressure (see [`entropy_range_by_pressure`]).
pub fn properties_ps(
    pressure: Pressure,
    entropy: SpecificEntropy,
) -> Result<ThermodynamicState, SteamError> {
    resolve(
        pressure.get::<megapascal>(),
        entropy.get::<kilojoule_per_kilogram_kelvin>(),
        Target::Entropy,
    )
}

/// Two-phase properties at a pressure and vapor quality.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] off the saturation curve or for a
/// quality outside `[0, 1]`.
pub fn properties_px(
    pressure: Pressure,
    quality: f64,
) -> Result<ThermodynamicState, SteamError> {
    saturation::saturation_by_pressure(pressure)?.state_at(quality)
}

/// The region a (p, T) query evaluates in, without computing properties.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] outside `(0, 100] MPa` ×
/// `[273.15, 1073.15] K`.
pub fn region_pt(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<Region, SteamError> {
    region_select(pressure.get::<megapascal>(), temperature.get::<kelvin>())
}

/// The acceptable temperature span at a pressure.
///
/// The formulation covers the full `[273.15, 1073.15] K` span at every
/// valid pressure, so the bounds do not vary with the input.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] for pressures outside `(0, 100] MPa`.
pub fn temperature_range_by_pressure(
    pressure: Pressure,
) -> Result<(ThermodynamicTemperature, ThermodynamicTemperature), SteamError> {
    let pressure = pressure.get::<megapascal>();
    if pressure <= 0.0 || pressure > if97::PRESSURE_MAX {
        return Err(SteamError::out_of_domain(format!(
            "pressure {pressure} MPa is outside (0, {}] MPa",
            if97::PRESSURE_MAX
        )));
    }
    Ok((
        ThermodynamicTemperature::new::<kelvin>(if97::TEMPERATURE_MIN),
        ThermodynamicTemperature::new::<kelvin>(if97::TEMPERATURE_MAX),
    ))
}

/// The specific-enthalpy span reachable at a pressure, taken at the
/// temperature extremes.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] for pressures outside `(0, 100] MPa`.
pub fn enthalpy_range_by_pressure(
    pressure: Pressure,
) -> Result<(SpecificEnthalpy, SpecificEnthalpy), SteamError> {
    let (min, max) = raw_range(pressure.get::<megapascal>(), Target::Enthalpy)?;
    Ok((
        SpecificEnthalpy::new::<kilojoule_per_kilogram>(min),
        SpecificEnthalpy::new::<kilojoule_per_kilogram>(max),
    ))
}

/// The specific-entropy span reachable at a pressure, taken at the
/// temperature extremes.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] for pressures outside `(0, 100] MPa`.
pub fn entropy_range_by_pressure(
    pressure: Pressure,
) -> Result<(SpecificEntropy, SpecificEntropy), SteamError> {
    let (min, max) = raw_range(pressure.get::<megapascal>(), Target::Entropy)?;
    Ok((
        SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(min),
        SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(max),
    ))
}

fn raw_pt(
    pressure: f64,
    temperature: f64,
) -> Result<(PropertySet, Phase, Region), SteamError> {
    let region = region_select(pressure, temperature)?;
    let (props, phase) = match region {
        Region::R1 => (region1::properties(pressure, temperature), Phase::Liquid),
        Region::R3 => (region3::properties(pressure, temperature)?, Phase::Liquid),
        Region::R2 | Region::R2a | Region::R2b | Region::R2c => {
            (region2::properties(pressure, temperature), Phase::Gas)
        }
    };
    Ok((props, phase, region))
}

fn raw_range(pressure: f64, target: Target) -> Result<(f64, f64), SteamError> {
    let (min, _, _) = raw_pt(pressure, if97::TEMPERATURE_MIN)?;
    let (max, _, _) = raw_pt(pressure, if97::TEMPERATURE_MAX)?;
    Ok((target.extract(&min), target.extract(&max)))
}

/// Shared pressure/enthalpy and pressure/entropy resolver.
fn resolve(pressure: f64, value: f64, target: Target) -> Result<ThermodynamicState, SteamError> {
    let (min, max) = raw_range(pressure, target)?;
    if !(min..=max).contains(&value) {
        return Err(SteamError::out_of_domain(format!(
            "{} {value} at {pressure} MPa is outside [{min}, {max}]",
            target.label()
        )));
    }

    let sat = if pressure < if97::CRITICAL_PRESSURE {
        Some(saturation::raw_by_pressure(pressure)?)
    } else {
        None
    };

    // Everything below the liquid limit is region 1 or region 3; the limit
    // is the saturated-liquid value, or the gas-side B23 value once the
    // pressure clears the triple junction of regions 1, 2, and 3.
    let limit = if pressure > if97::PRESSURE_B13 {
        let boundary_temperature = boundary::b23_temperature(pressure)?;
        target.extract(&region2::properties(pressure, boundary_temperature))
    } else if let Some(sat) = &sat {
        target.extract(&sat.liquid)
    } else {
        return Err(SteamError::out_of_domain(format!(
            "no liquid limit at {pressure} MPa"
        )));
    };

    if value < limit {
        if pressure > if97::PRESSURE_B13 {
            let (b13, _, _) = raw_pt(pressure, if97::TEMPERATURE_B13)?;
            if value >= target.extract(&b13) {
                let temperature = backward::region3_temperature(target, pressure, value)?;
                let props = region3::properties(pressure, temperature)?;
                return Ok(ThermodynamicState::single_phase(
                    &props,
                    Phase::Liquid,
                    Region::R3,
                ));
            }
        }
        let temperature = match target {
            Target::Enthalpy => backward::refined_temperature(
                region1::properties,
                region1::temperature_ph,
                target,
                pressure,
                value,
            ),
            Target::Entropy => backward::refined_temperature(
                region1::properties,
                region1::temperature_ps,
                target,
                pressure,
                value,
            ),
        };
        let props = region1::properties(pressure, temperature);
        return Ok(ThermodynamicState::single_phase(
            &props,
            Phase::Liquid,
            Region::R1,
        ));
    }

    if let Some(sat) = &sat {
        let liquid_value = target.extract(&sat.liquid);
        let gas_value = target.extract(&sat.gas);
        if value >= liquid_value && value <= gas_value {
            let quality = (value - liquid_value) / (gas_value - liquid_value);
            return saturation::pair_from_raw(sat).state_at(quality);
        }
    }

    let (temperature, region) = if pressure <= 4.0 {
        let correlation: fn(f64, f64) -> f64 = match target {
            Target::Enthalpy => region2::temperature_ph_2a,
            Target::Entropy => region2::temperature_ps_2a,
        };
        (
            backward::refined_temperature(region2::properties, correlation, target, pressure, value),
            Region::R2a,
        )
    } else {
        let use_2b = match target {
            Target::Enthalpy => region2::b2bc_pressure(value) > pressure,
            Target::Entropy => value >= 5.85,
        };
        let (correlation, region): (fn(f64, f64) -> f64, Region) = match (target, use_2b) {
            (Target::Enthalpy, true) => (region2::temperature_ph_2b, Region::R2b),
            (Target::Enthalpy, false) => (region2::temperature_ph_2c, Region::R2c),
            (Target::Entropy, true) => (region2::temperature_ps_2b, Region::R2b),
            (Target::Entropy, false) => (region2::temperature_ps_2c, Region::R2c),
        };
        (
            backward::refined_temperature(region2::properties, correlation, target, pressure, value),
            region,
        )
    };
    let props = region2::properties(pressure, temperature);
    Ok(ThermodynamicState::single_phase(&props, Phase::Gas, region))
}

/// Convenience re-exports of the saturation entry points.
pub use crate::saturation::{saturation_by_pressure, saturation_by_temperature};

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::state::RegionTag;

    fn mpa(value: f64) -> Pressure {
        Pressure::new::<megapascal>(value)
    }

    fn k(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn pt_query_covers_all_three_regions() {
        let liquid = properties_pt(mpa(3.0), k(300.0)).unwrap();
        assert_eq!(liquid.phase, Phase::Liquid);
        assert_eq!(liquid.region, RegionTag::Single(Region::R1));
        assert_relative_eq!(
            liquid.enthalpy.get::<kilojoule_per_kilogram>(),
            0.115331273e3,
            max_relative = 1e-8
        );

        let gas = properties_pt(mpa(0.0035), k(700.0)).unwrap();
        assert_eq!(gas.phase, Phase::Gas);
        assert_relative_eq!(
            gas.entropy.get::<kilojoule_per_kilogram_kelvin>(),
            0.101749996e2,
            max_relative = 1e-8
        );

        let dense = properties_pt(mpa(25.5837018), k(650.0)).unwrap();
        assert_eq!(dense.region, RegionTag::Single(Region::R3));
        assert_relative_eq!(
            dense.density.value,
            500.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn ph_round_trips_through_each_region() {
        for &(p, t) in &[
            (3.0, 300.0),
            (80.0, 300.0),
            (0.0035, 300.0),
            (0.0035, 700.0),
            (30.0, 700.0),
            (25.5837018, 650.0),
        ] {
            let forward = properties_pt(mpa(p), k(t)).unwrap();
            let back = properties_ph(mpa(p), forward.enthalpy).unwrap();
            assert_relative_eq!(
                back.temperature.get::<kelvin>(),
                t,
                max_relative = 1e-5
            );
        }
    }

    #[test]
    fn ps_round_trips_through_each_region() {
        for &(p, t) in &[
            (3.0, 300.0),
            (80.0, 300.0),
            (0.0035, 700.0),
            (30.0, 700.0),
            (25.5837018, 650.0),
        ] {
            let forward = properties_pt(mpa(p), k(t)).unwrap();
            let back = properties_ps(mpa(p), forward.entropy).unwrap();
            assert_relative_eq!(
                back.temperature.get::<kelvin>(),
                t,
                max_relative = 1e-5
            );
        }
    }

    #[test]
    fn ph_resolves_two_phase_states_by_quality() {
        let pair = saturation_by_pressure(mpa(1.0)).unwrap();
        let midpoint = (pair.liquid.enthalpy + pair.gas.enthalpy) / 2.0;
        let state = properties_ph(mpa(1.0), midpoint).unwrap();
        assert_eq!(state.phase, Phase::Saturated);
        let quality = state.quality.unwrap();
        assert_relative_eq!(quality, 0.5, epsilon = 1e-9);
        assert_eq!(state.region.to_string(), "1&2");
    }

    #[test]
    fn px_mixes_with_quality_weights() {
        let state = properties_px(mpa(1.0), 0.25).unwrap();
        let pair = saturation_by_pressure(mpa(1.0)).unwrap();
        let expected = pair.liquid.entropy * 0.75 + pair.gas.entropy * 0.25;
        assert_relative_eq!(state.entropy.value, expected.value, max_relative = 1e-12);
        assert!(properties_px(mpa(1.0), 1.2).is_err());
    }

    #[test]
    fn sub_region_dispatch_matches_the_dividing_lines() {
        // 2a is capped at 4 MPa; above that the B2bc line (PH) or the
        // 5.85 kJ/(kg·K) isentrope (PS) splits 2b from 2c. Expected
        // temperatures from IAPWS-IF97 Tables 24 and 29.
        let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>;
        let s = SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>;

        let state = properties_ph(mpa(0.001), h(3000.0)).unwrap();
        assert_eq!(state.region, RegionTag::Single(Region::R2a));
        assert_relative_eq!(
            state.temperature.get::<kelvin>(),
            0.534433241e3,
            max_relative = 1e-4
        );

        let state = properties_ph(mpa(25.0), h(3500.0)).unwrap();
        assert_eq!(state.region, RegionTag::Single(Region::R2b));
        assert_relative_eq!(
            state.temperature.get::<kelvin>(),
            0.875279054e3,
            max_relative = 1e-4
        );

        let state = properties_ph(mpa(60.0), h(2700.0)).unwrap();
        assert_eq!(state.region, RegionTag::Single(Region::R2c));
        assert_relative_eq!(
            state.temperature.get::<kelvin>(),
            0.791137067e3,
            max_relative = 1e-4
        );

        let state = properties_ps(mpa(8.0), s(6.0)).unwrap();
        assert_eq!(state.region, RegionTag::Single(Region::R2b));
        assert_relative_eq!(
            state.temperature.get::<kelvin>(),
            0.600484040e3,
            max_relative = 1e-4
        );

        let state = properties_ps(mpa(80.0), s(5.25)).unwrap();
        assert_eq!(state.region, RegionTag::Single(Region::R2c));
        assert_relative_eq!(
            state.temperature.get::<kelvin>(),
            0.854011484e3,
            max_relative = 1e-4
        );
    }

    #[test]
    fn ranges_bound_the_reachable_values() {
        let (h_min, h_max) = enthalpy_range_by_pressure(mpa(1.0)).unwrap();
        assert!(h_min.value < h_max.value);
        assert!(properties_ph(mpa(1.0), h_max * 1.01).is_err());
        assert!(
            properties_ph(
                mpa(1.0),
                h_min - SpecificEnthalpy::new::<kilojoule_per_kilogram>(50.0)
            )
            .is_err()
        );

        let (t_min, t_max) = temperature_range_by_pressure(mpa(1.0)).unwrap();
        assert_relative_eq!(t_min.get::<kelvin>(), 273.15);
        assert_relative_eq!(t_max.get::<kelvin>(), 1073.15);

        let (s_min, s_max) = entropy_range_by_pressure(mpa(1.0)).unwrap();
        assert!(s_min.value < s_max.value);
    }

    #[test]
    fn region_query_agrees_with_the_property_query() {
        assert_eq!(region_pt(mpa(3.0), k(300.0)).unwrap(), Region::R1);
        assert_eq!(region_pt(mpa(25.0), k(650.0)).unwrap(), Region::R3);
        assert!(region_pt(mpa(3.0), k(100.0)).is_err());
    }
}
