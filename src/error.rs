use thiserror::Error;

/// Errors that may occur when evaluating water/steam properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SteamError {
    /// The input state is outside the IF97 validity range, or the input pair
    /// maps to no region.
    ///
    /// The formulation covers pressures in `(0, 100] MPa` and temperatures in
    /// `[273.15, 1073.15] K`, with tighter limits on the saturation curve.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// An iterative solver exhausted its iteration cap before meeting its
    /// residual tolerance.
    ///
    /// The best estimate reached is reported rather than silently accepted
    /// as exact.
    #[error(
        "failed to converge: {context} (best estimate {best_estimate} after {iterations} iterations)"
    )]
    ConvergenceFailure {
        context: String,
        best_estimate: f64,
        iterations: u32,
    },
}

impl SteamError {
    pub(crate) fn out_of_domain(context: impl Into<String>) -> Self {
        Self::OutOfDomain {
            context: context.into(),
        }
    }
}
