//! The IAPWS-IF97 equation set.
//!
//! This module holds the pure forward and backward equations of the
//! industrial formulation: one submodule per region plus the region 2/3
//! boundary curve. Everything here is plain `f64` arithmetic in the
//! formulation's natural units:
//!
//! - pressure: MPa
//! - temperature: K
//! - specific enthalpy / internal energy: kJ/kg
//! - specific entropy: kJ/(kg·K)
//! - specific volume: m³/kg
//!
//! The coefficient tables are reproduced from the IAPWS-IF97 release
//! ("Revised Release on the IAPWS Industrial Formulation 1997 for the
//! Thermodynamic Properties of Water and Steam"). Forward equations are
//! total functions over their documented region; domain checks live in the
//! orchestration layers ([`crate::saturation`] and [`crate::query`]), which
//! validate before evaluating.

pub mod boundary;
pub mod region1;
pub mod region2;
pub mod region3;
pub mod region4;

/// Specific gas constant of water, kJ/(kg·K).
pub const GAS_CONSTANT: f64 = 0.461526;

/// Critical temperature, K.
pub const CRITICAL_TEMPERATURE: f64 = 647.096;

/// Critical pressure, MPa.
pub const CRITICAL_PRESSURE: f64 = 22.064;

/// Critical density, kg/m³.
pub const CRITICAL_DENSITY: f64 = 322.0;

/// Lowest temperature covered by the formulation, K.
pub const TEMPERATURE_MIN: f64 = 273.15;

/// Highest temperature covered by the formulation, K.
pub const TEMPERATURE_MAX: f64 = 1073.15;

/// Lowest pressure accepted by this crate, MPa.
pub const PRESSURE_MIN: f64 = 0.01;

/// Highest pressure covered by the formulation, MPa.
pub const PRESSURE_MAX: f64 = 100.0;

/// Temperature where regions 1, 3, and 4 meet, K.
pub const TEMPERATURE_B13: f64 = 623.15;

/// Saturation pressure at [`TEMPERATURE_B13`], MPa.
pub const PRESSURE_B13: f64 = 16.5291643;

/// Highest temperature on the region 2/3 boundary, K.
pub const TEMPERATURE_B23_MAX: f64 = 863.15;

/// A complete single-phase property set in IF97 working units.
///
/// Produced by the region forward equations; the public API converts these
/// into [`ThermodynamicState`](crate::state::ThermodynamicState) values with
/// typed quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySet {
    /// MPa
    pub pressure: f64,
    /// K
    pub temperature: f64,
    /// m³/kg
    pub specific_volume: f64,
    /// kg/m³, always `1 / specific_volume`
    pub density: f64,
    /// kJ/kg
    pub internal_energy: f64,
    /// kJ/kg
    pub enthalpy: f64,
    /// kJ/(kg·K)
    pub entropy: f64,
}
