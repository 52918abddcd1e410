//! Saturation vapor pressure.
//!
//! Two flavors: empirical fits for water (the formulas used in the GFDL
//! climate model, after the Smithsonian meteorological tables), and a
//! simplified Clausius-Clapeyron relation that works for any gas with
//! tabulated triple-point and latent-heat data. All units are mks.

use crate::constants::RSTAR;
use crate::errors::ClimateError;
use crate::tables::gases::Gas;

/// Which empirical fit `satvp_h2o` evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SvpFormula {
    /// Saturation over liquid water above 0 C, over ice below -20 C,
    /// with a linear blend between.
    #[default]
    General,
    /// Saturation over liquid water.
    Water,
    /// Saturation over ice, valid between -153 C and 0 C.
    Ice,
    /// Alternate formula for saturation over liquid water (Heymsfield).
    Heymsfield,
}

/// Saturation vapor pressure of water [Pa] at `temp_k` [K].
///
/// The fit constants are those of the GFDL climate model, circa 1995;
/// see the Smithsonian meteorological tables, page 350.
pub fn satvp_h2o(temp_k: f64, formula: SvpFormula) -> Result<f64, ClimateError> {
    // A common slip is passing Celsius; anything <= 0 K cannot be right
    if temp_k <= 0.0 {
        return Err(ClimateError::NonPhysicalTemperature(temp_k));
    }

    let pressure = match formula {
        SvpFormula::Water => {
            let esbasw: f64 = 1013246.0; // saturation at the steam point [dyn/cm²... fit units]
            let tbasw = 373.16; // steam point [K]

            let aa = -7.90298 * (tbasw / temp_k - 1.0);
            let b = 5.02808 * (tbasw / temp_k).log10();
            let c = -1.3816e-7 * 10.0_f64.powf((1.0 - temp_k / tbasw) * 11.344 - 1.0);
            let d = 8.1328e-3 * 10.0_f64.powf((tbasw / temp_k - 1.0) * (-3.49149) - 1.0);
            let e = esbasw.log10();

            // The fit is in 0.1 Pa; convert to Pascals
            10.0_f64.powf(aa + b + c + d + e) * 0.1
        }
        SvpFormula::Ice => {
            let esbasi: f64 = 6107.1; // saturation at the ice point, fit units
            let tbasi = 273.16; // ice point [K]

            let aa = -9.09718 * (tbasi / temp_k - 1.0);
            let b = -3.56654 * (tbasi / temp_k).log10();
            let c = 0.876793 * (1.0 - temp_k / tbasi);
            let e = esbasi.log10();

            10.0_f64.powf(aa + b + c + e) * 0.1
        }
        SvpFormula::General => {
            let t_celsius = temp_k - 273.16;
            if t_celsius > 0.0 {
                satvp_h2o(temp_k, SvpFormula::Water)?
            } else if t_celsius < -20.0 {
                satvp_h2o(temp_k, SvpFormula::Ice)?
            } else {
                // Linear transition from water saturation at 0 C down to
                // ice saturation at -20 C
                let water = satvp_h2o(temp_k, SvpFormula::Water)?;
                let ice = satvp_h2o(temp_k, SvpFormula::Ice)?;
                water + t_celsius / 20.0 * (water - ice)
            }
        }
        SvpFormula::Heymsfield => {
            let ts = 373.16;
            let sr = 3.0057166;

            let ar = ts / temp_k;
            let br = 7.90298 * (ar - 1.0);
            let cr = 5.02808 * ar.log10();
            let dw = 1.3816e-7 * (10.0_f64.powf(11.344 * (1.0 - 1.0 / ar)) - 1.0);
            let er = 8.1328e-3 * (10.0_f64.powf(-(3.49149 * (ar - 1.0))) - 1.0);

            10.0_f64.powf(cr - dw + er + sr - br) * 1.0e2
        }
    };

    Ok(pressure)
}

/// Which latent heat the Clausius-Clapeyron relation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Latent heat of sublimation below the triple point, vaporization
    /// above it, chosen per evaluation.
    #[default]
    Switch,
    /// Always the latent heat of sublimation.
    Ice,
    /// Always the latent heat of vaporization.
    Liquid,
}

#[derive(Debug, Clone, Copy)]
enum LatentHeat {
    Fixed(f64),
    Switch { sublimation: f64, vaporization: f64 },
}

/// Saturation vapor pressure from the simplified Clausius-Clapeyron
/// relation, assuming the perfect gas law and constant latent heat:
///
///   p(T) = p0 · exp(-(L/Rv) (1/T - 1/T0)),  Rv = R*/M.
///
/// The thermodynamic data is stored once at construction, so the object
/// is evaluated like a plain function afterwards:
///
/// ```
/// use climate_utilities::thermo::satvp::{Phase, SatVp};
/// use climate_utilities::tables::gases;
///
/// let svp = SatVp::for_gas(&gases::CO2, Phase::Switch).unwrap();
/// let p = svp.pressure(150.0).unwrap();
/// assert!(p > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SatVp {
    t0: f64,
    p0: f64,
    molecular_weight: f64,
    latent_heat: LatentHeat,
    switch_point: f64,
}

impl SatVp {
    /// Build from raw constants: a reference temperature [K] and pressure
    /// [Pa] on the saturation curve, the molecular weight [kg/kmol], and
    /// a constant latent heat [J/kg].
    pub fn new(t0: f64, p0: f64, molecular_weight: f64, latent_heat: f64) -> Self {
        SatVp {
            t0,
            p0,
            molecular_weight,
            latent_heat: LatentHeat::Fixed(latent_heat),
            switch_point: t0,
        }
    }

    /// Build from a gas record, anchored at its triple point.
    ///
    /// With `Phase::Switch` the latent heat of sublimation is used below
    /// the triple point and the latent heat of vaporization above it;
    /// `Phase::Ice` and `Phase::Liquid` force one or the other. Gases
    /// without the needed condensed-phase data (Earth air) are rejected.
    pub fn for_gas(gas: &'static Gas, phase: Phase) -> Result<Self, ClimateError> {
        let missing = |property| ClimateError::MissingGasProperty {
            gas: gas.name,
            property,
        };

        let t0 = gas.triple_point_t.ok_or_else(|| missing("triple point temperature"))?;
        let p0 = gas.triple_point_p.ok_or_else(|| missing("triple point pressure"))?;

        let latent_heat = match phase {
            Phase::Ice => LatentHeat::Fixed(
                gas.l_sublimation
                    .ok_or_else(|| missing("latent heat of sublimation"))?,
            ),
            Phase::Liquid => LatentHeat::Fixed(
                gas.l_vaporization
                    .ok_or_else(|| missing("latent heat of vaporization"))?,
            ),
            Phase::Switch => LatentHeat::Switch {
                sublimation: gas
                    .l_sublimation
                    .ok_or_else(|| missing("latent heat of sublimation"))?,
                vaporization: gas
                    .l_vaporization
                    .ok_or_else(|| missing("latent heat of vaporization"))?,
            },
        };

        Ok(SatVp {
            t0,
            p0,
            molecular_weight: gas.molecular_weight,
            latent_heat,
            switch_point: t0,
        })
    }

    /// Saturation vapor pressure [Pa] at `temp_k` [K].
    pub fn pressure(&self, temp_k: f64) -> Result<f64, ClimateError> {
        if temp_k <= 0.0 {
            return Err(ClimateError::NonPhysicalTemperature(temp_k));
        }
        Ok(self.pressure_raw(temp_k))
    }

    /// Evaluation without the Kelvin check, for internal callers that
    /// already hold a positive temperature (e.g. exp(ln T)).
    pub(crate) fn pressure_raw(&self, temp_k: f64) -> f64 {
        let latent = match self.latent_heat {
            LatentHeat::Fixed(l) => l,
            LatentHeat::Switch {
                sublimation,
                vaporization,
            } => {
                if temp_k < self.switch_point {
                    sublimation
                } else {
                    vaporization
                }
            }
        };

        let rv = RSTAR / self.molecular_weight;
        self.p0 * (-(latent / rv) * (1.0 / temp_k - 1.0 / self.t0)).exp()
    }
}
