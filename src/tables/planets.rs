//! Planetary database.
//!
//! Source for the planetary data, and some of the data on the moons, is
//! the NSSDC planetary fact sheets (https://nssdc.gsfc.nasa.gov/planetary/factsheet/).
//! For gas giants, "surface" quantities are given at the 1-bar level. For
//! moons, the orbital quantities (semimajor axis, year, eccentricity,
//! solar constant) are those of the host planet.
//!
//! All values are stored in mks units: the fact-sheet Earth-mass
//! multiples, hours and Earth-days are converted right in the table.

use crate::constants::{
    EARTH_MASS, GRAVITATIONAL_CONSTANT, SECONDS_PER_DAY, SECONDS_PER_HOUR, STEFAN_BOLTZMANN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Planet,
    DwarfPlanet,
    Moon,
}

/// Basic planetary data for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: &'static str,
    pub kind: BodyKind,
    /// Center of the body's orbit
    pub orbits: &'static str,
    /// Mean radius [m]
    pub mean_radius: f64,
    /// Surface gravitational acceleration [m/s²]
    pub surface_gravity: f64,
    /// Bond albedo [fraction]
    pub albedo: f64,
    /// Annual mean solar constant, current epoch [W/m²]
    pub solar_constant: f64,
    /// Mass [kg]
    pub mass: f64,
    /// Semimajor axis of the orbit about the Sun [m]
    pub semimajor_axis: f64,
    /// Sidereal length of year [s]
    pub year: f64,
    /// Orbital eccentricity
    pub eccentricity: f64,
    /// Mean tropical length of day [s]
    pub day: f64,
    /// Obliquity to orbit [deg]
    pub obliquity: Option<f64>,
    /// Mean surface temperature [K]
    pub mean_surface_temp: Option<f64>,
    /// Maximum surface temperature [K]
    pub max_surface_temp: Option<f64>,
    /// Minimum surface temperature [K]
    pub min_surface_temp: Option<f64>,
}

impl Planet {
    /// Gravitational acceleration at altitude above the mean surface,
    /// from the inverse-square law.
    pub fn gravity_at_altitude(&self, altitude: f64) -> f64 {
        let distance = self.mean_radius + altitude;
        GRAVITATIONAL_CONSTANT * self.mass / distance.powi(2)
    }

    /// Escape velocity from the given altitude [m/s].
    pub fn escape_velocity(&self, altitude: f64) -> f64 {
        let distance = self.mean_radius + altitude;
        (2.0 * GRAVITATIONAL_CONSTANT * self.mass / distance).sqrt()
    }

    /// Planetary equilibrium temperature [K]: the blackbody temperature
    /// balancing absorbed sunlight, (L (1 - albedo) / 4 sigma)^(1/4).
    pub fn equilibrium_temperature(&self) -> f64 {
        (self.solar_constant * (1.0 - self.albedo) / (4.0 * STEFAN_BOLTZMANN)).powf(0.25)
    }
}

pub static EARTH: Planet = Planet {
    name: "Earth",
    kind: BodyKind::Planet,
    orbits: "Sun",
    mean_radius: 6.371e6,
    surface_gravity: 9.798,
    albedo: 0.306,
    solar_constant: 1367.6,
    mass: 1.0 * EARTH_MASS,
    semimajor_axis: 149.60e9,
    year: 365.256 * SECONDS_PER_DAY,
    eccentricity: 0.0167,
    day: 24.0 * SECONDS_PER_HOUR,
    obliquity: Some(23.45),
    mean_surface_temp: Some(288.0),
    max_surface_temp: None,
    min_surface_temp: None,
};

pub static MERCURY: Planet = Planet {
    name: "Mercury",
    kind: BodyKind::Planet,
    orbits: "Sun",
    mean_radius: 2.4397e6,
    surface_gravity: 3.70,
    albedo: 0.119,
    solar_constant: 9126.6,
    mass: 0.0553 * EARTH_MASS,
    semimajor_axis: 57.91e9,
    year: 87.969 * SECONDS_PER_DAY,
    eccentricity: 0.2056,
    day: 4222.6 * SECONDS_PER_HOUR,
    obliquity: Some(0.01),
    mean_surface_temp: Some(440.0),
    max_surface_temp: Some(725.0),
    min_surface_temp: None,
};

pub static VENUS: Planet = Planet {
    name: "Venus",
    kind: BodyKind::Planet,
    orbits: "Sun",
    mean_radius: 6.0518e6,
    surface_gravity: 8.87,
    albedo: 0.750,
    solar_constant: 2613.9,
    mass: 0.815 * EARTH_MASS,
    semimajor_axis: 108.21e9,
    year: 224.701 * SECONDS_PER_DAY,
    eccentricity: 0.0067,
    day: 2802.0 * SECONDS_PER_HOUR,
    obliquity: Some(177.36),
    mean_surface_temp: Some(737.0),
    max_surface_temp: Some(737.0),
    min_surface_temp: None,
};

pub static MARS: Planet = Planet {
    name: "Mars",
    kind: BodyKind::Planet,
    orbits: "Sun",
    mean_radius: 3.390e6,
    surface_gravity: 3.71,
    albedo: 0.250,
    solar_constant: 589.2,
    mass: 0.107 * EARTH_MASS,
    semimajor_axis: 227.92e9,
    year: 686.98 * SECONDS_PER_DAY,
    eccentricity: 0.0935,
    day: 24.6597 * SECONDS_PER_HOUR,
    obliquity: Some(25.19),
    mean_surface_temp: Some(210.0),
    max_surface_temp: Some(295.0),
    min_surface_temp: None,
};

pub static JUPITER: Planet = Planet {
    name: "Jupiter",
    kind: BodyKind::Planet,
    orbits: "Sun",
    mean_radius: 69.911e6,
    surface_gravity: 24.79,
    albedo: 0.343,
    solar_constant: 50.5,
    mass: 317.8 * EARTH_MASS,
    semimajor_axis: 778.57e9,
    year: 4332.0 * SECONDS_PER_DAY,
    eccentricity: 0.0489,
    day: 9.9259 * SECONDS_PER_HOUR,
    obliquity: Some(3.13),
    mean_surface_temp: Some(165.0),
    max_surface_temp: None,
    min_surface_temp: None,
};

pub static SATURN: Planet = Planet {
    name: "Saturn",
    kind: BodyKind::Planet,
    orbits: "Sun",
    mean_radius: 58.232e6,
    surface_gravity: 10.44,
    albedo: 0.342,
    solar_constant: 14.90,
    mass: 95.2 * EARTH_MASS,
    semimajor_axis: 1433.0e9,
    year: 10759.0 * SECONDS_PER_DAY,
    eccentricity: 0.0565,
    day: 10.656 * SECONDS_PER_HOUR,
    obliquity: Some(26.73),
    mean_surface_temp: Some(134.0),
    max_surface_temp: None,
    min_surface_temp: None,
};

pub static URANUS: Planet = Planet {
    name: "Uranus",
    kind: BodyKind::Planet,
    orbits: "Sun",
    mean_radius: 25.362e6,
    surface_gravity: 8.87,
    albedo: 0.300,
    solar_constant: 3.71,
    mass: 14.5 * EARTH_MASS,
    semimajor_axis: 2872.46e9,
    year: 30685.4 * SECONDS_PER_DAY,
    eccentricity: 0.0457,
    day: 17.24 * SECONDS_PER_HOUR,
    obliquity: Some(97.77),
    mean_surface_temp: Some(76.0),
    max_surface_temp: None,
    min_surface_temp: None,
};

pub static NEPTUNE: Planet = Planet {
    name: "Neptune",
    kind: BodyKind::Planet,
    orbits: "Sun",
    mean_radius: 26.624e6,
    surface_gravity: 11.15,
    albedo: 0.290,
    solar_constant: 1.51,
    mass: 17.2 * EARTH_MASS,
    semimajor_axis: 4495.06e9,
    year: 60189.0 * SECONDS_PER_DAY,
    eccentricity: 0.0113,
    day: 16.11 * SECONDS_PER_HOUR,
    obliquity: Some(28.32),
    mean_surface_temp: Some(72.0),
    max_surface_temp: None,
    min_surface_temp: None,
};

pub static PLUTO: Planet = Planet {
    name: "Pluto",
    kind: BodyKind::DwarfPlanet,
    orbits: "Sun",
    mean_radius: 1.195e6,
    surface_gravity: 0.58,
    albedo: 0.5,
    solar_constant: 0.89,
    mass: 0.00218 * EARTH_MASS,
    semimajor_axis: 5906.0e9,
    year: 90465.0 * SECONDS_PER_DAY,
    eccentricity: 0.2488,
    day: 153.2820 * SECONDS_PER_HOUR,
    obliquity: Some(122.53),
    mean_surface_temp: Some(50.0),
    max_surface_temp: None,
    min_surface_temp: None,
};

pub static MOON: Planet = Planet {
    name: "Moon",
    kind: BodyKind::Moon,
    orbits: "Earth",
    mean_radius: 1.737e6,
    surface_gravity: 1.62,
    albedo: 0.11,
    solar_constant: 1367.6,
    mass: 0.0123 * EARTH_MASS,
    semimajor_axis: 149.60e9,
    year: 365.256 * SECONDS_PER_DAY,
    eccentricity: 0.0167,
    day: 28.0 * SECONDS_PER_HOUR,
    obliquity: None,
    mean_surface_temp: None,
    max_surface_temp: Some(400.0),
    min_surface_temp: Some(100.0),
};

pub static TITAN: Planet = Planet {
    name: "Titan",
    kind: BodyKind::Moon,
    orbits: "Saturn",
    mean_radius: 2.575e6,
    surface_gravity: 1.35,
    albedo: 0.21,
    solar_constant: 14.90,
    mass: 0.0225 * EARTH_MASS,
    semimajor_axis: 1433.0e9,
    year: 10759.0 * SECONDS_PER_DAY,
    eccentricity: 0.0565,
    day: 15.9452 * SECONDS_PER_HOUR,
    obliquity: Some(26.73),
    mean_surface_temp: Some(95.0),
    max_surface_temp: None,
    min_surface_temp: None,
};

pub static EUROPA: Planet = Planet {
    name: "Europa",
    kind: BodyKind::Moon,
    orbits: "Jupiter",
    mean_radius: 1.560e6,
    surface_gravity: 1.31,
    albedo: 0.67,
    solar_constant: 50.5,
    mass: 0.008 * EARTH_MASS,
    semimajor_axis: 778.57e9,
    year: 4332.0 * SECONDS_PER_DAY,
    eccentricity: 0.0489,
    day: 3.551 * SECONDS_PER_HOUR,
    obliquity: Some(3.13),
    mean_surface_temp: Some(103.0),
    max_surface_temp: Some(125.0),
    min_surface_temp: None,
};

// Triton's seasons are strongly shaped by the ~157 deg inclination of its
// orbit to Neptune's equator; the obliquity entry is to the ecliptic.
pub static TRITON: Planet = Planet {
    name: "Triton",
    kind: BodyKind::Moon,
    orbits: "Neptune",
    mean_radius: 1.3534e6,
    surface_gravity: 0.78,
    albedo: 0.76,
    solar_constant: 1.51,
    mass: 0.00359 * EARTH_MASS,
    semimajor_axis: 4495.06e9,
    year: 60189.0 * SECONDS_PER_DAY,
    eccentricity: 0.0113,
    day: 5.877 * SECONDS_PER_HOUR,
    obliquity: Some(156.0),
    mean_surface_temp: Some(34.5),
    max_surface_temp: None,
    min_surface_temp: None,
};

pub static PLANETS: [&Planet; 13] = [
    &EARTH, &MERCURY, &VENUS, &MARS, &JUPITER, &SATURN, &URANUS, &NEPTUNE, &PLUTO, &MOON, &TITAN,
    &EUROPA, &TRITON,
];

/// Look up a body by name, e.g. `by_name("Mars")`.
pub fn by_name(name: &str) -> Option<&'static Planet> {
    PLANETS.iter().copied().find(|planet| planet.name == name)
}

/// mks units of each `Planet` field.
pub static UNITS: [(&str, &str); 13] = [
    ("mean_radius", "m"),
    ("surface_gravity", "m/s**2"),
    ("albedo", "fraction"),
    ("solar_constant", "W/m**2"),
    ("mass", "kg"),
    ("semimajor_axis", "m"),
    ("year", "s"),
    ("eccentricity", "none"),
    ("day", "s"),
    ("obliquity", "deg"),
    ("mean_surface_temp", "K"),
    ("max_surface_temp", "K"),
    ("min_surface_temp", "K"),
];

pub fn unit_of(field: &str) -> Option<&'static str> {
    UNITS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, unit)| *unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_earth_record() {
        let earth = by_name("Earth").unwrap();
        assert_eq!(earth.kind, BodyKind::Planet);
        assert_relative_eq!(earth.year, 365.256 * 3600.0 * 24.0);
        assert_relative_eq!(earth.mass, 5.9722e24);
        assert_relative_eq!(earth.day, 86_400.0);
    }

    #[test]
    fn test_moons_point_at_their_hosts() {
        assert_eq!(by_name("Titan").unwrap().orbits, "Saturn");
        assert_eq!(by_name("Europa").unwrap().orbits, "Jupiter");
        assert_eq!(by_name("Triton").unwrap().orbits, "Neptune");
        assert_eq!(by_name("Moon").unwrap().orbits, "Earth");
    }

    #[test]
    fn test_surface_gravity_consistent_with_mass_and_radius() {
        // g at zero altitude from G M / r² should be close to the
        // tabulated fact-sheet surface gravity. The giants are the loose
        // cases: their fact-sheet gravity refers to the equatorial 1-bar
        // level, not the mean radius.
        for planet in PLANETS {
            let computed = planet.gravity_at_altitude(0.0);
            let relative_error = (computed - planet.surface_gravity).abs() / planet.surface_gravity;
            assert!(
                relative_error < 0.15,
                "{}: computed g = {:.3}, tabulated g = {:.3}",
                planet.name,
                computed,
                planet.surface_gravity
            );
        }
    }

    #[test]
    fn test_gravity_decreases_with_altitude() {
        let mars = by_name("Mars").unwrap();
        assert!(mars.gravity_at_altitude(300_000.0) < mars.gravity_at_altitude(0.0));
    }

    #[test]
    fn test_earth_escape_velocity() {
        let earth = by_name("Earth").unwrap();
        assert_abs_diff_eq!(earth.escape_velocity(0.0), 11_186.0, epsilon = 50.0);
    }

    #[test]
    fn test_earth_equilibrium_temperature() {
        // The textbook value for present Earth is ~255 K
        let earth = by_name("Earth").unwrap();
        assert_abs_diff_eq!(earth.equilibrium_temperature(), 254.3, epsilon = 1.0);
    }

    #[test]
    fn test_equilibrium_temperature_ordering() {
        // Absorbed flux falls off with distance from the Sun
        let venus = by_name("Venus").unwrap();
        let earth = by_name("Earth").unwrap();
        let neptune = by_name("Neptune").unwrap();
        assert!(venus.equilibrium_temperature() > neptune.equilibrium_temperature());
        assert!(earth.equilibrium_temperature() > neptune.equilibrium_temperature());
    }

    #[test]
    fn test_table_is_physically_plausible() {
        for planet in PLANETS {
            assert!(planet.mass > 0.0, "{}: bad mass", planet.name);
            assert!(planet.mean_radius > 0.0, "{}: bad radius", planet.name);
            assert!(
                (0.0..=1.0).contains(&planet.albedo),
                "{}: bad albedo",
                planet.name
            );
            assert!(
                planet.eccentricity >= 0.0 && planet.eccentricity < 1.0,
                "{}: bad eccentricity",
                planet.name
            );
        }
    }

    #[test]
    fn test_units_dictionary() {
        assert_eq!(unit_of("year"), Some("s"));
        assert_eq!(unit_of("solar_constant"), Some("W/m**2"));
        assert_eq!(unit_of("bogus"), None);
    }
}
