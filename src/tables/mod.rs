pub mod gases;
pub mod planets;
