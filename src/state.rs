//! Typed thermodynamic states for water and steam.

use std::fmt;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, Pressure, SpecificVolume, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::{
    constraint::UnitInterval,
    error::SteamError,
    if97::PropertySet,
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

/// The phase of a computed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Liquid,
    Gas,
    Saturated,
}

/// An IF97 region or sub-region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    R1,
    R2,
    R2a,
    R2b,
    R2c,
    R3,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::R1 => "1",
            Region::R2 => "2",
            Region::R2a => "2a",
            Region::R2b => "2b",
            Region::R2c => "2c",
            Region::R3 => "3",
        };
        f.write_str(label)
    }
}

/// The region classification attached to a state.
///
/// Single-phase states carry the region their properties were evaluated in;
/// saturated states carry the pair of regions used for the liquid and gas
/// branches, rendered as `liquid&gas` (for example `1&2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionTag {
    Single(Region),
    Saturation { liquid: Region, gas: Region },
}

impl fmt::Display for RegionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionTag::Single(region) => write!(f, "{region}"),
            RegionTag::Saturation { liquid, gas } => write!(f, "{liquid}&{gas}"),
        }
    }
}

/// A complete, immutable water/steam property set.
///
/// Each query constructs a fresh value; nothing is mutated in place.
/// `density · specific_volume = 1` always holds, and `quality` is populated
/// exactly when `phase` is [`Phase::Saturated`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermodynamicState {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
    pub internal_energy: SpecificInternalEnergy,
    pub specific_volume: SpecificVolume,
    pub density: MassDensity,
    pub phase: Phase,
    pub quality: Option<f64>,
    pub region: RegionTag,
}

impl ThermodynamicState {
    /// Builds a single-phase state from an IF97 working-unit property set.
    pub(crate) fn single_phase(props: &PropertySet, phase: Phase, region: Region) -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<kelvin>(props.temperature),
            pressure: Pressure::new::<megapascal>(props.pressure),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(props.enthalpy),
            entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(props.entropy),
            internal_energy: SpecificInternalEnergy::new::<kilojoule_per_kilogram>(
                props.internal_energy,
            ),
            specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(props.specific_volume),
            density: MassDensity::new::<kilogram_per_cubic_meter>(props.density),
            phase,
            quality: None,
            region: RegionTag::Single(region),
        }
    }
}

/// Saturated liquid and gas states at a common pressure and temperature.
///
/// The liquid member has quality 0, the gas member quality 1. Intermediate
/// mixture states come from [`SaturationPair::state_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPair {
    pub liquid: ThermodynamicState,
    pub gas: ThermodynamicState,
}

impl SaturationPair {
    /// Common saturation temperature of both members.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.gas.temperature
    }

    /// Common saturation pressure of both members.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.gas.pressure
    }

    /// Returns the mixture state at the given vapor mass fraction.
    ///
    /// Enthalpy, entropy, internal energy, and specific volume are the
    /// quality-weighted combination `gas·q + liquid·(1−q)`; density is the
    /// reciprocal of the mixed specific volume.
    ///
    /// # Errors
    ///
    /// Returns [`SteamError::OutOfDomain`] if `quality` is outside `[0, 1]`.
    pub fn state_at(&self, quality: f64) -> Result<ThermodynamicState, SteamError> {
        let quality = UnitInterval::new(quality)
            .map_err(|e| SteamError::out_of_domain(format!("quality {quality}: {e}")))?
            .into_inner();

        let liquid = &self.liquid;
        let gas = &self.gas;
        let specific_volume =
            gas.specific_volume * quality + liquid.specific_volume * (1.0 - quality);

        Ok(ThermodynamicState {
            temperature: gas.temperature,
            pressure: gas.pressure,
            enthalpy: gas.enthalpy * quality + liquid.enthalpy * (1.0 - quality),
            entropy: gas.entropy * quality + liquid.entropy * (1.0 - quality),
            internal_energy: gas.internal_energy * quality
                + liquid.internal_energy * (1.0 - quality),
            specific_volume,
            density: 1.0 / specific_volume,
            phase: Phase::Saturated,
            quality: Some(quality),
            region: self.region_tag(),
        })
    }

    /// The compound region tag of this pair, for example `1&2`.
    #[must_use]
    pub fn region_tag(&self) -> RegionTag {
        let single = |tag: RegionTag| match tag {
            RegionTag::Single(region) => region,
            RegionTag::Saturation { liquid, .. } => liquid,
        };
        RegionTag::Saturation {
            liquid: single(self.liquid.region),
            gas: single(self.gas.region),
        }
    }
}
