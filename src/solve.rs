//! Iterative solvers layered over the closed-form region equations.

pub(crate) mod backward;
pub(crate) mod region3;
