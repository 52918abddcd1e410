use climate_utilities::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Saturation vapor pressure of water over a range of temperatures
    println!("Saturation vapor pressure of water:");
    println!("{:>8} {:>14}", "T [K]", "e_sat [Pa]");
    for t in (240..=310).step_by(10) {
        let es = satvp_h2o(t as f64, SvpFormula::General)?;
        println!("{:>8} {:>14.4}", t, es);
    }

    // Moist adiabat for water vapor in air, Earthlike surface conditions
    let adiabat = MoistAdiabat::new(&gases::H2O, &gases::AIR)?;
    let grid: Vec<f64> = (1..=10).rev().map(|i| i as f64 * 1.0e4).collect();
    let profile = adiabat.profile_on_grid(1.0e5, 300.0, &grid)?;

    println!();
    println!("Moist adiabat, water vapor in air (ps = 1 bar, Ts = 300 K):");
    println!(
        "{:>12} {:>10} {:>14} {:>14}",
        "p [Pa]", "T [K]", "x [mol/mol]", "q [kg/kg]"
    );
    for i in 0..profile.len() {
        println!(
            "{:>12.0} {:>10.2} {:>14.6e} {:>14.6e}",
            profile.pressure[i],
            profile.temperature[i],
            profile.molar_concentration[i],
            profile.mass_concentration[i]
        );
    }

    // Equilibrium temperatures across the planetary table
    println!();
    println!("Planetary equilibrium temperatures:");
    println!("{:>10} {:>12} {:>12}", "Body", "T_eq [K]", "v_esc [km/s]");
    for planet in planets::PLANETS {
        println!(
            "{:>10} {:>12.1} {:>12.2}",
            planet.name,
            planet.equilibrium_temperature(),
            planet.escape_velocity(0.0) / 1000.0
        );
    }

    Ok(())
}
