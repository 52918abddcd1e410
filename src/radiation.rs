use crate::constants::{BOLTZMANN, PLANCK, SPEED_OF_LIGHT, STEFAN_BOLTZMANN};
use crate::errors::ClimateError;

/// Planck function of frequency, B(nu, T) in W/(m²·Hz·sr).
///
/// B(nu, T) = (2 h nu³ / c²) / (e^u - 1) with u = h nu / (k T).
pub fn planck(frequency: f64, temperature: f64) -> Result<f64, ClimateError> {
    if temperature <= 0.0 {
        return Err(ClimateError::NonPhysicalTemperature(temperature));
    }
    if frequency < 0.0 {
        return Err(ClimateError::NegativeFrequency(frequency));
    }

    // Cap the exponent so h*nu >> k*T cannot overflow the exponential
    let u = (PLANCK * frequency / (BOLTZMANN * temperature)).min(500.0);
    let radiance =
        (2.0 * PLANCK * frequency.powi(3) / SPEED_OF_LIGHT.powi(2)) / (u.exp() - 1.0);

    Ok(radiance)
}

/// Total blackbody flux, sigma T⁴ in W/m².
pub fn blackbody_flux(temperature: f64) -> Result<f64, ClimateError> {
    if temperature < 0.0 {
        return Err(ClimateError::NonPhysicalTemperature(temperature));
    }
    Ok(STEFAN_BOLTZMANN * temperature.powi(4))
}
