pub mod integrator;
pub mod interpolation;
pub mod quadrature;
pub mod roots;
