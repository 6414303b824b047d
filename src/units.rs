//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities crossing the public
//! API (temperature, pressure, specific volume, density). A few specific
//! quantities aren't distinguished by [`uom`] itself, so this module defines
//! them as dimension aliases.
//!
//! Unit constructors from the dimensionally equivalent quantities apply
//! directly, for example:
//!
//! ```
//! use steam97::units::SpecificEnthalpy;
//! use uom::si::available_energy::kilojoule_per_kilogram;
//!
//! let h = SpecificEnthalpy::new::<kilojoule_per_kilogram>(2675.0);
//! ```

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific internal energy, J/kg in SI.
pub type SpecificInternalEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
