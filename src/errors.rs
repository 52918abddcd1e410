use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateError {
    #[error("non-physical temperature {0} K: inputs are in Kelvin and must be positive")]
    NonPhysicalTemperature(f64),

    #[error("negative frequency: {0} Hz")]
    NegativeFrequency(f64),

    #[error("{gas} has no tabulated {property}")]
    MissingGasProperty {
        gas: &'static str,
        property: &'static str,
    },

    #[error("interpolation tables must have the same non-zero length (got {x_len} and {y_len})")]
    TableLengthMismatch { x_len: usize, y_len: usize },

    #[error("no convergence after {iterations} iterations")]
    NoConvergence { iterations: usize },

    #[error("surface pressure {surface} Pa must exceed the profile top {top} Pa")]
    InvalidPressureRange { surface: f64, top: f64 },
}
