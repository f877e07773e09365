// Whole-model checks of the standard seven-layer configuration:
// boundary continuity, monotonic pressure, and altitude/pressure inversion.

use atmo_isa_rust::assert_deviation;
use atmo_isa_rust::error::IsaError;
use atmo_isa_rust::standard::{standard_model, STANDARD_LAYERS};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use more_asserts::assert_lt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_boundary_continuity_between_all_layers() {
    let model = standard_model().unwrap();

    let mut boundary_km = 0.0;
    for pair in model.layers().windows(2) {
        let (below, above) = (&pair[0], &pair[1]);
        boundary_km += below.height_km();

        // Top of the layer below and bottom of the layer above agree
        assert_abs_diff_eq!(above.base_temp_k(), below.top_temp_k(), epsilon = 1e-9);
        assert_relative_eq!(
            above.base_pressure_pa(),
            below.top_pressure_pa(),
            max_relative = 1e-12
        );

        // And the model-level queries are continuous across the boundary
        let t_below = below.temperature_at_altitude(below.height_km()).unwrap();
        let t_above = above.temperature_at_altitude(0.0).unwrap();
        assert_abs_diff_eq!(t_below, t_above, epsilon = 1e-9);

        let t_model = model.temperature_at_altitude(boundary_km).unwrap();
        assert_abs_diff_eq!(t_model, t_below, epsilon = 1e-6);

        println!(
            "   boundary {:.3} km: {:.4} K / {:.4} Pa",
            boundary_km,
            t_below,
            below.top_pressure_pa()
        );
    }
}

#[test]
fn test_pressure_strictly_decreases_over_full_sweep() {
    let model = standard_model().unwrap();
    let total_km = model.total_height_km();

    let steps = 1000;
    let mut previous = f64::INFINITY;
    for step in 0..=steps {
        let altitude_km = total_km * step as f64 / steps as f64;
        let pressure = model.pressure_at_altitude(altitude_km).unwrap();
        assert_lt!(pressure, previous, "at {altitude_km} km");
        previous = pressure;
    }
}

#[test]
fn test_round_trip_at_sampled_altitudes() {
    let model = standard_model().unwrap();
    let total_km = model.total_height_km();
    let mut rng = StdRng::seed_from_u64(42);

    let mut worst_error = 0.0f64;
    for _ in 0..500 {
        let altitude_km: f64 = rng.random_range(0.0..total_km);
        let pressure = model.pressure_at_altitude(altitude_km).unwrap();
        let recovered = model.altitude_at_pressure(pressure).unwrap();
        assert_relative_eq!(recovered, altitude_km, max_relative = 1e-6, epsilon = 1e-9);
        worst_error = worst_error.max((recovered - altitude_km).abs());
    }
    println!("   worst round-trip error over 500 samples: {worst_error:.3e} km");
}

#[test]
fn test_round_trip_at_boundaries() {
    let model = standard_model().unwrap();

    let mut boundary_km = 0.0;
    for layer in model.layers() {
        boundary_km += layer.height_km();
        let pressure = model.pressure_at_altitude(boundary_km).unwrap();
        let recovered = model.altitude_at_pressure(pressure).unwrap();
        assert_relative_eq!(recovered, boundary_km, max_relative = 1e-6);
    }
}

#[test]
fn test_boundary_queries_succeed_and_beyond_fails() {
    let model = standard_model().unwrap();
    let total_km = model.total_height_km();

    assert!(model.temperature_at_altitude(0.0).is_ok());
    assert!(model.pressure_at_altitude(0.0).is_ok());
    assert!(model.temperature_at_altitude(total_km).is_ok());
    assert!(model.pressure_at_altitude(total_km).is_ok());

    assert!(matches!(
        model.temperature_at_altitude(total_km + 1.0),
        Err(IsaError::OutOfRange { .. })
    ));
    assert!(matches!(
        model.pressure_at_altitude(total_km + 1.0),
        Err(IsaError::OutOfRange { .. })
    ));
}

#[test]
fn test_pressure_domain_ends_at_the_ceiling() {
    let model = standard_model().unwrap();
    let ceiling_pressure = model
        .pressure_at_altitude(model.total_height_km())
        .unwrap();

    assert!(model.altitude_at_pressure(ceiling_pressure).is_ok());
    assert!(matches!(
        model.altitude_at_pressure(ceiling_pressure * 0.9),
        Err(IsaError::OutOfRange { .. })
    ));
    // Above sea-level pressure there is no altitude either
    assert!(matches!(
        model.altitude_at_pressure(150_000.0),
        Err(IsaError::OutOfRange { .. })
    ));
}

#[test]
fn test_inverse_queries_against_reference_values() {
    let model = standard_model().unwrap();

    // 50 kPa sits mid-troposphere
    let altitude = model.altitude_at_pressure(50_000.0).unwrap();
    assert_deviation!(altitude, 6.044117, 0.001);
    let temperature = model.temperature_at_pressure(50_000.0).unwrap();
    assert_deviation!(temperature, 252.863238, 0.001);

    // The whole tropopause is isothermal at the troposphere's top temperature
    let t_tropopause = model.temperature_at_pressure(22_632.0).unwrap();
    assert_abs_diff_eq!(t_tropopause, 220.5265, epsilon = 1e-6);
}

#[test]
fn test_ceiling_conditions() {
    let model = standard_model().unwrap();
    let total_km = model.total_height_km();

    assert_deviation!(
        model.temperature_at_altitude(total_km).unwrap(),
        191.9627,
        0.001
    );
    assert_deviation!(
        model.pressure_at_altitude(total_km).unwrap(),
        0.722027,
        0.001
    );
}

#[test]
fn test_published_table_is_monotone() {
    let mut previous_top = 0.0;
    for spec in STANDARD_LAYERS {
        assert_lt!(previous_top, spec.top_km, "layer {}", spec.name);
        previous_top = spec.top_km;
    }
}

#[test]
fn test_queries_are_shareable_across_threads() {
    let model = standard_model().unwrap();

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let model = &model;
            scope.spawn(move || {
                for step in 0..100 {
                    let altitude_km = model.total_height_km() * step as f64 / 100.0;
                    let pressure = model.pressure_at_altitude(altitude_km).unwrap();
                    let recovered = model.altitude_at_pressure(pressure).unwrap();
                    assert_relative_eq!(
                        recovered,
                        altitude_km,
                        max_relative = 1e-6,
                        epsilon = 1e-9
                    );
                }
                println!("   worker {worker} finished");
            });
        }
    });
}
