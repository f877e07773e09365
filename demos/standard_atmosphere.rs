// Sweep the standard atmosphere, print the profile, and export it as JSON.

use atmo_isa_rust::profile::{profile_to_json, sample_profile};
use atmo_isa_rust::standard::{STANDARD_ATMOSPHERE, STANDARD_LAYERS};
use atmo_isa_rust::temp_utils::kelvin_to_celsius;
use colored::Colorize;

fn main() {
    let atmosphere = &*STANDARD_ATMOSPHERE;

    println!("{}", "🌍 Standard Atmosphere".bold());
    println!("{}", "======================".bold());
    println!(
        "{} layers up to {:.3} km",
        atmosphere.layer_count(),
        atmosphere.total_height_km()
    );
    println!();

    println!("{}", "Layer stack (bottom up):".cyan().bold());
    let mut base_km = 0.0;
    for (layer, spec) in atmosphere.layers().iter().zip(STANDARD_LAYERS) {
        println!(
            "   {:>12}  {:>7.3} - {:>7.3} km  {:+.1} K/km  {:>8.2} K  {:>12.3} Pa",
            spec.name,
            base_km,
            base_km + layer.height_km(),
            layer.lapse_rate_k_per_km(),
            layer.base_temp_k(),
            layer.base_pressure_pa()
        );
        base_km += layer.height_km();
    }
    println!();

    println!("{}", "Profile (5 km steps):".cyan().bold());
    println!("   altitude       temperature          pressure");
    let samples =
        sample_profile(atmosphere, 5.0).expect("standard atmosphere samples at 5 km steps");
    for sample in &samples {
        println!(
            "   {:>7.3} km   {:>8.2} K ({:>7.2} °C)   {:>12.3} Pa",
            sample.altitude_km,
            sample.temperature_k,
            kelvin_to_celsius(sample.temperature_k),
            sample.pressure_pa
        );
    }
    println!();

    println!("{}", "Altitude by pressure:".cyan().bold());
    // The last probe sits below the ceiling pressure and is rejected
    for pressure_pa in [101325.0, 50_000.0, 10_000.0, 1_000.0, 1.0, 0.5] {
        match atmosphere.altitude_at_pressure(pressure_pa) {
            Ok(altitude_km) => {
                let temperature_k = atmosphere
                    .temperature_at_pressure(pressure_pa)
                    .expect("pressure was just resolved to an altitude");
                println!(
                    "   {:>10.1} Pa -> {:>7.3} km, {:>7.2} K",
                    pressure_pa, altitude_km, temperature_k
                );
            }
            Err(error) => {
                println!("   {:>10.1} Pa -> {}", pressure_pa, format!("{error}").red());
            }
        }
    }
    println!();

    let json = profile_to_json(&samples).expect("profile samples serialize");
    let path = "standard_atmosphere_profile.json";
    std::fs::write(path, json).expect("profile JSON is writable");
    println!("{} {}", "📄 profile exported to".green(), path.green().bold());
}
