//! Moist adiabat for a condensible gas in a noncondensing background.
//!
//! The parcel is saturated in the condensible at every level; latent-heat
//! release makes the profile less steep than the dry adiabat. The
//! governing ODE is integrated in log coordinates, marching the
//! noncondensible partial pressure from the surface toward the top of the
//! atmosphere.

use log::warn;

use crate::errors::ClimateError;
use crate::math::integrator::Rk4;
use crate::math::interpolation::Interp;
use crate::tables::gases::Gas;
use crate::thermo::satvp::{Phase, SatVp};

/// One computed moist-adiabat profile, surface first.
///
/// `pressure` is the total pressure at each level (noncondensible plus
/// condensible saturation pressure), so it decreases with height.
#[derive(Debug, Clone)]
pub struct AdiabatProfile {
    /// Total pressure [Pa]
    pub pressure: Vec<f64>,
    /// Temperature [K]
    pub temperature: Vec<f64>,
    /// Molar concentration of the condensible [mol/mol]
    pub molar_concentration: Vec<f64>,
    /// Mass specific concentration of the condensible [kg/kg]
    pub mass_concentration: Vec<f64>,
}

impl AdiabatProfile {
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }
}

/// Computes the moist adiabat for a mixture of a condensible gas and a
/// noncondensing gas.
///
/// Calling `profile(ps, ts)` with the surface partial pressure of the
/// noncondensible [Pa] and the surface temperature [K] returns the
/// temperature and concentration structure of the column. The
/// integration runs at fixed resolution in log noncondensible pressure;
/// `profile_on_grid` re-interpolates the result onto a caller-chosen
/// list of pressures.
#[derive(Debug, Clone)]
pub struct MoistAdiabat {
    condensible: &'static Gas,
    noncondensible: &'static Gas,
    svp: SatVp,
    /// Noncondensible pressure where the integration stops [Pa]
    pub ptop: f64,
    /// Step in ln(pa); negative to march upward
    pub step: f64,

    // Thermodynamic constants, fixed at construction
    eps: f64,
    latent: f64,
    r_c: f64,
    cp_c: f64,
    r_a: f64,
    cp_a: f64,
}

impl MoistAdiabat {
    pub fn new(
        condensible: &'static Gas,
        noncondensible: &'static Gas,
    ) -> Result<Self, ClimateError> {
        let svp = SatVp::for_gas(condensible, Phase::Switch)?;
        let latent =
            condensible
                .l_vaporization
                .ok_or(ClimateError::MissingGasProperty {
                    gas: condensible.name,
                    property: "latent heat of vaporization",
                })?;

        Ok(MoistAdiabat {
            condensible,
            noncondensible,
            svp,
            ptop: 100.0,
            step: -0.05,
            eps: condensible.molecular_weight / noncondensible.molecular_weight,
            latent,
            r_c: condensible.gas_constant(),
            cp_c: condensible.cp,
            r_a: noncondensible.gas_constant(),
            cp_a: noncondensible.cp,
        })
    }

    /// d(ln T)/d(ln pa) along the saturated adiabat.
    fn slope(&self, log_pa: f64, log_t: f64) -> f64 {
        let pa = log_pa.exp();
        let t = log_t.exp();
        let r_sat = self.eps * self.svp.pressure_raw(t) / pa;

        let num = self.r_a * (1.0 + self.latent * r_sat / (self.r_a * t));
        let den = self.cp_a
            + (self.cp_c + (self.latent / (self.r_c * t) - 1.0) * self.latent / t) * r_sat;

        num / den
    }

    /// Integrate the adiabat from surface conditions up to `ptop`.
    ///
    /// `surface_pressure` is the partial pressure of the noncondensible
    /// at the surface [Pa]; `surface_temp` is in K.
    pub fn profile(
        &self,
        surface_pressure: f64,
        surface_temp: f64,
    ) -> Result<AdiabatProfile, ClimateError> {
        if surface_temp <= 0.0 {
            return Err(ClimateError::NonPhysicalTemperature(surface_temp));
        }
        if surface_pressure <= self.ptop {
            return Err(ClimateError::InvalidPressureRange {
                surface: surface_pressure,
                top: self.ptop,
            });
        }

        let mut pressure = Vec::new();
        let mut temperature = Vec::new();
        let mut molar = Vec::new();

        let mut record = |pa: f64, t: f64| {
            let p_total = pa + self.svp.pressure_raw(t);
            pressure.push(p_total);
            temperature.push(t);
            molar.push(self.svp.pressure_raw(t) / p_total);
        };

        record(surface_pressure, surface_temp);

        let mut stepper = Rk4::new(
            |log_pa, log_t| self.slope(log_pa, log_t),
            surface_pressure.ln(),
            surface_temp.ln(),
            self.step,
        );

        loop {
            let (log_pa, log_t) = stepper.step();
            let pa = log_pa.exp();
            record(pa, log_t.exp());
            if pa <= self.ptop {
                break;
            }
        }

        let mass = self.mass_concentration(&molar);

        Ok(AdiabatProfile {
            pressure,
            temperature,
            molar_concentration: molar,
            mass_concentration: mass,
        })
    }

    /// Same computation as `profile`, interpolated onto `pressure_grid`
    /// (total pressures, in Pa). The integration still runs at the
    /// native resolution; the result is fit to the requested levels with
    /// polynomial interpolation.
    pub fn profile_on_grid(
        &self,
        surface_pressure: f64,
        surface_temp: f64,
        pressure_grid: &[f64],
    ) -> Result<AdiabatProfile, ClimateError> {
        let native = self.profile(surface_pressure, surface_temp)?;

        let p_max = native.pressure[0];
        let p_min = native.pressure[native.len() - 1];
        if pressure_grid
            .iter()
            .any(|&p| !(p_min..=p_max).contains(&p))
        {
            warn!(
                "pressure grid extends outside the computed profile ({:.3e}..{:.3e} Pa); \
                 those levels are extrapolated",
                p_min, p_max
            );
        }

        let t = Interp::new(&native.pressure, &native.temperature)?;
        let mc = Interp::new(&native.pressure, &native.molar_concentration)?;
        let q = Interp::new(&native.pressure, &native.mass_concentration)?;

        let mut temperature = Vec::with_capacity(pressure_grid.len());
        let mut molar = Vec::with_capacity(pressure_grid.len());
        let mut mass = Vec::with_capacity(pressure_grid.len());
        for &p in pressure_grid {
            temperature.push(t.eval(p)?);
            molar.push(mc.eval(p)?);
            mass.push(q.eval(p)?);
        }

        Ok(AdiabatProfile {
            pressure: pressure_grid.to_vec(),
            temperature,
            molar_concentration: molar,
            mass_concentration: mass,
        })
    }

    /// Mass specific concentration from molar concentration, via the
    /// concentration-weighted mean molecular weight.
    fn mass_concentration(&self, molar: &[f64]) -> Vec<f64> {
        let m_c = self.condensible.molecular_weight;
        let m_nc = self.noncondensible.molecular_weight;
        molar
            .iter()
            .map(|&x| {
                let m_bar = x * m_c + (1.0 - x) * m_nc;
                (m_c / m_bar) * x
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::gases;
    use approx::assert_relative_eq;

    fn water_in_air() -> MoistAdiabat {
        MoistAdiabat::new(&gases::H2O, &gases::AIR).unwrap()
    }

    #[test]
    fn test_surface_level_values() {
        let adiabat = water_in_air();
        let profile = adiabat.profile(1.0e5, 300.0).unwrap();

        // The surface level carries the requested temperature, and the
        // total pressure includes the condensible partial pressure
        assert_relative_eq!(profile.temperature[0], 300.0);
        let e_sat = adiabat.svp.pressure(300.0).unwrap();
        assert_relative_eq!(profile.pressure[0], 1.0e5 + e_sat, epsilon = 1e-6);
        assert_relative_eq!(
            profile.molar_concentration[0],
            e_sat / (1.0e5 + e_sat),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_temperature_and_pressure_decrease_upward() {
        let profile = water_in_air().profile(1.0e5, 300.0).unwrap();
        assert!(profile.len() > 50, "expected a well-resolved column");

        for i in 1..profile.len() {
            assert!(
                profile.pressure[i] < profile.pressure[i - 1],
                "total pressure must fall monotonically (level {})",
                i
            );
            assert!(
                profile.temperature[i] < profile.temperature[i - 1],
                "temperature must fall along the adiabat (level {})",
                i
            );
        }
    }

    #[test]
    fn test_profile_reaches_the_top() {
        let adiabat = water_in_air();
        let profile = adiabat.profile(1.0e5, 300.0).unwrap();

        // The last level is the first one at or below ptop in
        // noncondensible pressure; total pressure sits slightly above
        let last = *profile.pressure.last().unwrap();
        assert!(last < adiabat.ptop * 1.2);
    }

    #[test]
    fn test_concentrations_are_physical() {
        let profile = water_in_air().profile(1.0e5, 300.0).unwrap();

        for i in 0..profile.len() {
            let x = profile.molar_concentration[i];
            let q = profile.mass_concentration[i];
            assert!((0.0..1.0).contains(&x), "molar concentration out of range");
            assert!((0.0..1.0).contains(&q), "mass concentration out of range");
            // Water is lighter than air, so q < x everywhere
            assert!(q < x, "mass concentration should be below molar for H2O in air");
        }
    }

    #[test]
    fn test_moist_adiabat_is_warmer_than_dry() {
        // Latent heating makes the saturated column warmer at altitude
        // than the dry adiabat T = Ts (p/ps)^(R/cp)
        let adiabat = water_in_air();
        let profile = adiabat.profile(1.0e5, 300.0).unwrap();

        let rcp = gases::AIR.adiabatic_exponent();
        let idx = profile.len() / 2;
        let dry = 300.0 * (profile.pressure[idx] / profile.pressure[0]).powf(rcp);
        assert!(
            profile.temperature[idx] > dry,
            "moist {:.1} K should exceed dry {:.1} K",
            profile.temperature[idx],
            dry
        );
    }

    #[test]
    fn test_co2_in_n2_runs() {
        // The textbook's other standard pairing
        let adiabat = MoistAdiabat::new(&gases::CO2, &gases::N2).unwrap();
        let profile = adiabat.profile(2.0e5, 250.0).unwrap();

        assert!(profile.len() > 50);
        assert!(*profile.temperature.last().unwrap() < 250.0);
        for &x in &profile.molar_concentration {
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_profile_on_grid() {
        let adiabat = water_in_air();
        let grid = [9.0e4, 5.0e4, 1.0e4, 1.0e3];
        let profile = adiabat.profile_on_grid(1.0e5, 300.0, &grid).unwrap();

        assert_eq!(profile.len(), grid.len());
        assert_eq!(profile.pressure, grid);

        // Interpolated temperatures follow the same ordering as the grid
        for i in 1..profile.len() {
            assert!(profile.temperature[i] < profile.temperature[i - 1]);
        }

        // Spot check against the native profile: the interpolated value
        // at a native level must match it closely
        let native = adiabat.profile(1.0e5, 300.0).unwrap();
        let idx = native.len() / 2;
        let on_native = adiabat
            .profile_on_grid(1.0e5, 300.0, &[native.pressure[idx]])
            .unwrap();
        assert_relative_eq!(
            on_native.temperature[0],
            native.temperature[idx],
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_rejects_bad_surface_conditions() {
        let adiabat = water_in_air();
        assert!(matches!(
            adiabat.profile(1.0e5, -10.0),
            Err(ClimateError::NonPhysicalTemperature(_))
        ));
        assert!(matches!(
            adiabat.profile(50.0, 300.0),
            Err(ClimateError::InvalidPressureRange { .. })
        ));
    }

    #[test]
    fn test_air_cannot_condense() {
        assert!(MoistAdiabat::new(&gases::AIR, &gases::N2).is_err());
    }
}
