pub mod moist_adiabat;
pub mod satvp;
