//! # steam97
//!
//! Water and steam thermodynamic properties from the IAPWS-IF97 industrial
//! formulation.
//!
//! ## Crate layout
//!
//! - [`query`]: Property lookups by (p, T), (p, h), (p, s), and (p, x).
//! - [`saturation`]: Saturated liquid/gas pairs along the region 4 curve.
//! - [`state`]: The [`ThermodynamicState`] result type and its phase and
//!   region tags.
//! - [`if97`]: The closed-form region equations and boundary curves.
//! - [`units`]: [`uom`] quantity aliases for specific enthalpy, entropy,
//!   and internal energy.
//!
//! Inputs and outputs are [`uom`] quantities; the numerics underneath work
//! in the formulation's own units (MPa, K, kJ/kg).
//!
//! ## Example
//!
//! ```
//! use steam97::properties_pt;
//! use uom::si::f64::{Pressure, ThermodynamicTemperature};
//! use uom::si::pressure::megapascal;
//! use uom::si::thermodynamic_temperature::kelvin;
//!
//! let state = properties_pt(
//!     Pressure::new::<megapascal>(3.0),
//!     ThermodynamicTemperature::new::<kelvin>(450.0),
//! )?;
//! assert_eq!(state.region.to_string(), "1");
//! # Ok::<(), steam97::SteamError>(())
//! ```

pub mod constraint;
pub mod error;
pub mod if97;
pub mod query;
pub mod saturation;
pub mod state;
pub mod units;

mod region;
mod solve;

pub use error::SteamError;
pub use query::{
    enthalpy_range_by_pressure, entropy_range_by_pressure, properties_ph, properties_ps,
    properties_pt, properties_px, region_pt, temperature_range_by_pressure,
};
pub use saturation::{saturation_by_pressure, saturation_by_temperature};
pub use state::{Phase, Region, RegionTag, SaturationPair, ThermodynamicState};
