//! Saturated liquid/gas property pairs along the region 4 curve.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::megapascal,
    thermodynamic_temperature::kelvin,
};

use crate::{
    error::SteamError,
    if97::{self, PropertySet, region1, region2, region4},
    solve,
    state::{Phase, Region, SaturationPair, ThermodynamicState},
};

/// Working-unit saturation pair, before unit wrapping.
pub(crate) struct RawSaturation {
    pub liquid: PropertySet,
    pub liquid_region: Region,
    pub gas: PropertySet,
}

/// Evaluates both saturation branches at a pressure.
///
/// The gas branch always comes from region 2. The liquid branch comes from
/// region 1 up to 623.15 K and from the region 3 density solve between there
/// and the critical point.
pub(crate) fn raw_by_pressure(pressure: f64) -> Result<RawSaturation, SteamError> {
    let temperature = region4::saturation_temperature(pressure)?;
    if temperature < if97::TEMPERATURE_MIN {
        return Err(SteamError::out_of_domain(format!(
            "saturation at {pressure} MPa falls below {} K",
            if97::TEMPERATURE_MIN
        )));
    }

    let gas = region2::properties(pressure, temperature);
    let (liquid, liquid_region) = if temperature <= if97::TEMPERATURE_B13 {
        (region1::properties(pressure, temperature), Region::R1)
    } else {
        (
            solve::region3::properties(pressure, temperature)?,
            Region::R3,
        )
    };

    Ok(RawSaturation {
        liquid,
        liquid_region,
        gas,
    })
}

pub(crate) fn pair_from_raw(raw: &RawSaturation) -> SaturationPair {
    let mut liquid =
        ThermodynamicState::single_phase(&raw.liquid, Phase::Liquid, raw.liquid_region);
    liquid.quality = Some(0.0);
    let mut gas = ThermodynamicState::single_phase(&raw.gas, Phase::Gas, Region::R2);
    gas.quality = Some(1.0);
    SaturationPair { liquid, gas }
}

/// Saturated liquid and gas states at a pressure.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] for pressures above the critical
/// pressure or below the pressure where the saturation temperature drops
/// under 273.15 K.
pub fn saturation_by_pressure(pressure: Pressure) -> Result<SaturationPair, SteamError> {
    Ok(pair_from_raw(&raw_by_pressure(
        pressure.get::<megapascal>(),
    )?))
}

/// Saturated liquid and gas states at a temperature.
///
/// # Errors
///
/// Returns [`SteamError::OutOfDomain`] for temperatures outside
/// `[273.15, 647.096] K`.
pub fn saturation_by_temperature(
    temperature: ThermodynamicTemperature,
) -> Result<SaturationPair, SteamError> {
    let pressure = region4::saturation_pressure(temperature.get::<kelvin>())?;
    Ok(pair_from_raw(&raw_by_pressure(pressure)?))
}
