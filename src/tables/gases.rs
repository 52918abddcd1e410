//! Physical properties of gases.
//!
//! All units are mks. The values are approximate means for "normal"
//! temperatures and pressures, suitable for rough calculations only.
//! Fields without a reliable tabulated value are `None`; Earth air in
//! particular carries no condensed-phase data at all.

use crate::constants::RSTAR;

/// Thermodynamic properties of a single gas.
///
/// Latent heats of vaporization are tabulated both at the boiling point
/// (the temperature where saturation vapor pressure reaches 1.013 bar)
/// and at the triple point. For CO2 the "boiling point" would fall below
/// the triple point, so its boiling-point entry refers to the arbitrary
/// reference of 253 K. `l_vaporization` and `rho_liquid` are the default
/// picks: triple-point values where available, boiling-point otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Gas {
    pub name: &'static str,
    pub formula: &'static str,
    /// Molecular weight of the dominant isotopologue [kg/kmol]
    pub molecular_weight: f64,
    pub critical_point_t: Option<f64>, // K
    pub critical_point_p: Option<f64>, // Pa
    pub triple_point_t: Option<f64>,   // K
    pub triple_point_p: Option<f64>,   // Pa
    pub l_vaporization_boiling: Option<f64>, // J/kg
    pub l_vaporization_triple: Option<f64>,  // J/kg
    pub l_fusion: Option<f64>,         // J/kg, at the triple point
    pub l_sublimation: Option<f64>,    // J/kg, at the triple point
    pub rho_liquid_boiling: Option<f64>, // kg/m³
    pub rho_liquid_triple: Option<f64>,  // kg/m³
    pub rho_solid: Option<f64>,        // kg/m³, at or near the triple point
    /// Gas phase specific heat at 298 K and 1 bar [J/(kg·K)]
    pub cp: f64,
    /// cp/cv, generally stated at 298 K and 1 bar
    pub gamma: f64,
    /// Default latent heat of vaporization [J/kg]
    pub l_vaporization: Option<f64>,
    /// Default liquid phase density [kg/m³]
    pub rho_liquid: Option<f64>,
}

impl Gas {
    /// Specific gas constant R = R*/M [J/(kg·K)].
    pub fn gas_constant(&self) -> f64 {
        RSTAR / self.molecular_weight
    }

    /// The adiabatic exponent R/cp.
    pub fn adiabatic_exponent(&self) -> f64 {
        self.gas_constant() / self.cp
    }
}

pub static H2O: Gas = Gas {
    name: "Water",
    formula: "H2O",
    molecular_weight: 18.0,
    critical_point_t: Some(6.4710e2),
    critical_point_p: Some(2.2100e7),
    triple_point_t: Some(2.7315e2),
    triple_point_p: Some(6.1100e2),
    l_vaporization_boiling: Some(2.2550e6),
    l_vaporization_triple: Some(2.4930e6),
    l_fusion: Some(3.3400e5),
    l_sublimation: Some(2.8400e6),
    rho_liquid_boiling: Some(9.5840e2),
    rho_liquid_triple: Some(9.9987e2),
    rho_solid: Some(9.1700e2),
    cp: 1.8470e3,
    gamma: 1.3310,
    l_vaporization: Some(2.4930e6),
    rho_liquid: Some(9.9987e2),
};

pub static CH4: Gas = Gas {
    name: "Methane",
    formula: "CH4",
    molecular_weight: 16.0,
    critical_point_t: Some(1.9044e2),
    critical_point_p: Some(4.5960e6),
    triple_point_t: Some(9.0670e1),
    triple_point_p: Some(1.1700e4),
    l_vaporization_boiling: Some(5.1000e5),
    l_vaporization_triple: Some(5.3600e5),
    l_fusion: Some(5.8680e4),
    l_sublimation: Some(5.9500e5),
    rho_liquid_boiling: Some(4.5020e2),
    rho_liquid_triple: None,
    rho_solid: Some(5.0930e2),
    cp: 2.1950e3,
    gamma: 1.3050,
    l_vaporization: Some(5.3600e5),
    rho_liquid: Some(4.5020e2),
};

pub static CO2: Gas = Gas {
    name: "Carbon Dioxide",
    formula: "CO2",
    molecular_weight: 44.0,
    critical_point_t: Some(3.0420e2),
    critical_point_p: Some(7.3825e6),
    triple_point_t: Some(2.1654e2),
    triple_point_p: Some(5.1850e5),
    l_vaporization_boiling: None,
    l_vaporization_triple: Some(3.9700e5),
    l_fusion: Some(1.9600e5),
    l_sublimation: Some(5.9300e5),
    rho_liquid_boiling: Some(1.0320e3),
    rho_liquid_triple: Some(1.1100e3),
    rho_solid: Some(1.5620e3),
    cp: 8.2000e2,
    gamma: 1.2940,
    l_vaporization: Some(3.9700e5),
    rho_liquid: Some(1.1100e3),
};

pub static N2: Gas = Gas {
    name: "Nitrogen",
    formula: "N2",
    molecular_weight: 28.0,
    critical_point_t: Some(1.2620e2),
    critical_point_p: Some(3.4000e6),
    triple_point_t: Some(6.3140e1),
    triple_point_p: Some(1.2530e4),
    l_vaporization_boiling: Some(1.9800e5),
    l_vaporization_triple: Some(2.1800e5),
    l_fusion: Some(2.5730e4),
    l_sublimation: Some(2.4370e5),
    rho_liquid_boiling: Some(8.0860e2),
    rho_liquid_triple: None,
    rho_solid: Some(1.0260e3),
    cp: 1.0370e3,
    gamma: 1.4030,
    l_vaporization: Some(2.1800e5),
    rho_liquid: Some(8.0860e2),
};

pub static O2: Gas = Gas {
    name: "Oxygen",
    formula: "O2",
    molecular_weight: 32.0,
    critical_point_t: Some(1.5454e2),
    critical_point_p: Some(5.0430e6),
    triple_point_t: Some(5.4300e1),
    triple_point_p: Some(1.5000e2),
    l_vaporization_boiling: Some(2.1300e5),
    l_vaporization_triple: Some(2.4200e5),
    l_fusion: Some(1.3900e4),
    l_sublimation: Some(2.5600e5),
    rho_liquid_boiling: Some(1.1410e3),
    rho_liquid_triple: Some(1.3070e3),
    rho_solid: Some(1.3510e3),
    cp: 9.1600e2,
    gamma: 1.3930,
    l_vaporization: Some(2.4200e5),
    rho_liquid: Some(1.3070e3),
};

pub static H2: Gas = Gas {
    name: "Hydrogen",
    formula: "H2",
    molecular_weight: 2.0,
    critical_point_t: Some(3.3200e1),
    critical_point_p: Some(1.2980e6),
    triple_point_t: Some(1.3950e1),
    triple_point_p: Some(7.2000e3),
    l_vaporization_boiling: Some(4.5400e5),
    l_vaporization_triple: None,
    l_fusion: Some(5.8200e4),
    l_sublimation: None,
    rho_liquid_boiling: Some(7.0970e1),
    rho_liquid_triple: None,
    rho_solid: Some(8.8000e1),
    cp: 1.4230e4,
    gamma: 1.3840,
    l_vaporization: Some(4.5400e5),
    rho_liquid: Some(7.0970e1),
};

pub static HE: Gas = Gas {
    name: "Helium",
    formula: "He",
    molecular_weight: 4.0,
    critical_point_t: Some(5.1000),
    critical_point_p: Some(2.2800e5),
    triple_point_t: Some(2.1700),
    triple_point_p: Some(5.0700e3),
    l_vaporization_boiling: Some(2.0300e4),
    l_vaporization_triple: None,
    l_fusion: None,
    l_sublimation: None,
    rho_liquid_boiling: Some(1.2496e2),
    rho_liquid_triple: None,
    rho_solid: Some(2.0000e2),
    cp: 5.1960e3,
    gamma: 1.6640,
    l_vaporization: Some(2.0300e4),
    rho_liquid: Some(1.2496e2),
};

pub static NH3: Gas = Gas {
    name: "Ammonia",
    formula: "NH3",
    molecular_weight: 17.0,
    critical_point_t: Some(4.0550e2),
    critical_point_p: Some(1.1280e7),
    triple_point_t: Some(1.9540e2),
    triple_point_p: Some(6.1000e3),
    l_vaporization_boiling: Some(1.3710e6),
    l_vaporization_triple: Some(1.6580e6),
    l_fusion: Some(3.3140e5),
    l_sublimation: Some(1.9890e6),
    rho_liquid_boiling: Some(6.8200e2),
    rho_liquid_triple: Some(7.3420e2),
    rho_solid: Some(8.2260e2),
    cp: 2.0600e3,
    gamma: 1.3090,
    l_vaporization: Some(1.6580e6),
    rho_liquid: Some(7.3420e2),
};

/// Modern Earth air as an ideal mixture; no condensed-phase data.
pub static AIR: Gas = Gas {
    name: "Earth Air",
    formula: "air",
    molecular_weight: 28.97,
    critical_point_t: None,
    critical_point_p: None,
    triple_point_t: None,
    triple_point_p: None,
    l_vaporization_boiling: None,
    l_vaporization_triple: None,
    l_fusion: None,
    l_sublimation: None,
    rho_liquid_boiling: None,
    rho_liquid_triple: None,
    rho_solid: None,
    cp: 1004.0,
    gamma: 1.4003,
    l_vaporization: None,
    rho_liquid: None,
};

pub static GASES: [&Gas; 9] = [&H2O, &CH4, &CO2, &N2, &O2, &H2, &HE, &NH3, &AIR];

/// Look up a gas by chemical formula, e.g. `by_formula("CO2")`.
pub fn by_formula(formula: &str) -> Option<&'static Gas> {
    GASES.iter().copied().find(|gas| gas.formula == formula)
}

/// mks units of each `Gas` field.
pub static UNITS: [(&str, &str); 17] = [
    ("molecular_weight", "kg/kmol"),
    ("critical_point_t", "K"),
    ("critical_point_p", "Pa"),
    ("triple_point_t", "K"),
    ("triple_point_p", "Pa"),
    ("l_vaporization_boiling", "J/kg"),
    ("l_vaporization_triple", "J/kg"),
    ("l_fusion", "J/kg"),
    ("l_sublimation", "J/kg"),
    ("rho_liquid_boiling", "kg/m**3"),
    ("rho_liquid_triple", "kg/m**3"),
    ("rho_solid", "kg/m**3"),
    ("cp", "J/(kg K)"),
    ("gamma", "none"),
    ("l_vaporization", "J/kg"),
    ("rho_liquid", "kg/m**3"),
    ("gas_constant", "J/(kg K)"),
];

pub fn unit_of(field: &str) -> Option<&'static str> {
    UNITS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, unit)| *unit)
}
