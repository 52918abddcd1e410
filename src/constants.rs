// Fundamental Physical Constants (CODATA 2018)
pub const PLANCK: f64 = 6.626_070_15e-34; // J·s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0; // m/s
pub const BOLTZMANN: f64 = 1.380_649e-23; // J/K
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8; // W/(m²·K⁴)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11; // N·m²/kg²
pub const N_AVOGADRO: f64 = 6.022_140_76e23; // 1/mol

// Thermodynamic Constants
// RSTAR comes out in J/(K·kmol), so that dividing by a molecular weight in
// kg/kmol gives the specific gas constant in J/(kg·K).
pub const RSTAR: f64 = 1000.0 * BOLTZMANN * N_AVOGADRO; // J/(K·kmol)

// Reference quantities for the planetary table
pub const EARTH_MASS: f64 = 5.9722e24; // kg
pub const SECONDS_PER_HOUR: f64 = 3600.0; // s
pub const SECONDS_PER_DAY: f64 = 86_400.0; // s

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_universal_gas_constant() {
        // R* = 1000 k N_A must land on the familiar 8314.46 J/(K kmol)
        assert_relative_eq!(RSTAR, 8314.462618, epsilon = 1e-4);
    }

    #[test]
    fn test_specific_gas_constant_convention() {
        // Dividing by a molecular weight in kg/kmol gives mks specific gas
        // constants: dry air should come out near 287 J/(kg K)
        let r_air = RSTAR / 28.97;
        assert_relative_eq!(r_air, 287.0, epsilon = 0.1);
    }
}
