pub mod constants;
pub mod errors;
pub mod math;
pub mod radiation;
pub mod tables;
pub mod thermo;

pub use constants::*;
pub use errors::ClimateError;

// Re-export commonly used items from tables
pub use tables::gases::{self, Gas};
pub use tables::planets::{self, BodyKind, Planet};

// Re-export commonly used items from thermo
pub use thermo::moist_adiabat::{AdiabatProfile, MoistAdiabat};
pub use thermo::satvp::{satvp_h2o, Phase, SatVp, SvpFormula};

// Re-export commonly used math utilities
pub use math::interpolation::{polint, Interp};
pub use math::quadrature::romberg;
pub use math::roots::NewtonSolver;
