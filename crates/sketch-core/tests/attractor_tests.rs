use glam::Vec3;
use sketch_core::attractor::{project, step_particles, Attractor, DivergencePolicy, VectorField};
use sketch_core::config::AttractorConfig;
use sketch_core::particle::ParticleSet;
use sketch_core::{Animated, Frame, RngSource, SketchError};

fn small_config(field: VectorField) -> AttractorConfig {
    AttractorConfig { particle_count: 256, ..AttractorConfig::for_field(field) }
}

#[test]
fn test_zero_timestep_freezes_every_field() {
    for field in VectorField::ALL {
        let config = AttractorConfig { timestep: 0.0, ..small_config(field) };
        let mut attractor = Attractor::new(&config, &mut RngSource::seeded(1)).expect("valid config");
        let before = attractor.particles.raw_position.clone();
        for _ in 0..10 {
            attractor.step();
        }
        assert_eq!(attractor.particles.raw_position, before, "{} moved with dt = 0", field);
    }
}

#[test]
fn test_positions_sit_on_scaled_sphere() {
    for field in VectorField::ALL {
        let config = AttractorConfig { scale: 2.5, ..small_config(field) };
        let mut attractor = Attractor::new(&config, &mut RngSource::seeded(7)).expect("valid config");
        for _ in 0..50 {
            attractor.step();
        }
        for (raw, p) in attractor.particles.raw_position.iter().zip(&attractor.particles.position) {
            if raw.is_finite() && *raw != Vec3::ZERO {
                assert!(
                    (p.length() - 2.5).abs() < 1e-3,
                    "{}: |position| = {} for raw {:?}",
                    field,
                    p.length(),
                    raw
                );
            }
        }
    }
}

#[test]
fn test_lorenz_mod2_known_delta() {
    let d = VectorField::LorenzMod2.delta(Vec3::ONE, 0.001);
    let expected = Vec3::new(0.00801, -0.003, 0.005);
    assert!((d - expected).abs().max_element() < 1e-6, "delta {:?} != {:?}", d, expected);
}

#[test]
fn test_single_step_matches_euler() {
    let mut particles = ParticleSet::new(1);
    particles.raw_position[0] = Vec3::ONE;
    step_particles(&mut particles, VectorField::LorenzMod2.function(), 0.001, 1.0, DivergencePolicy::Propagate);
    let expected = Vec3::ONE + Vec3::new(0.00801, -0.003, 0.005);
    assert!((particles.raw_position[0] - expected).abs().max_element() < 1e-6);
    assert_eq!(particles.position[0], project(particles.raw_position[0], 1.0));
}

#[test]
fn test_origin_stays_at_origin_for_lorenz() {
    let mut particles = ParticleSet::new(4);
    step_particles(&mut particles, VectorField::Lorenz.function(), 0.01, 1.0, DivergencePolicy::Propagate);
    assert!(particles.raw_position.iter().all(|p| *p == Vec3::ZERO));
    assert!(particles.position.iter().all(|p| *p == Vec3::ZERO));
}

#[test]
fn test_update_ignores_frame_timing() {
    let mut a = Attractor::new(&small_config(VectorField::Aizawa), &mut RngSource::seeded(3)).expect("valid config");
    let mut b = Attractor::new(&small_config(VectorField::Aizawa), &mut RngSource::seeded(3)).expect("valid config");
    a.update(&Frame::new(0.0, 0.0, 0.016));
    b.update(&Frame::new(5.0, 0.9, 0.5));
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.positions_flat().len(), 256 * 3);
    assert_eq!(a.steps(), 1);
}

#[test]
fn test_reinitialize_resets_cloud() {
    let config = small_config(VectorField::Dadras);
    let mut attractor = Attractor::new(&config, &mut RngSource::seeded(9)).expect("valid config");
    let start = attractor.particles.raw_position.clone();
    attractor.step();
    attractor.reinitialize(&mut RngSource::seeded(9));
    assert_eq!(attractor.particles.raw_position, start);
    assert_eq!(attractor.steps(), 0);
}

#[test]
fn test_misconfiguration_is_rejected() {
    let mut rng = RngSource::seeded(0);
    let zero = AttractorConfig { particle_count: 0, ..AttractorConfig::default() };
    assert_eq!(
        Attractor::new(&zero, &mut rng).err(),
        Some(SketchError::ZeroCount("particle count"))
    );
    let bad_scale = AttractorConfig { scale: f32::NAN, ..AttractorConfig::default() };
    assert!(Attractor::new(&bad_scale, &mut rng).is_err());
    let negative_dt = AttractorConfig { timestep: -0.1, ..AttractorConfig::default() };
    assert!(Attractor::new(&negative_dt, &mut rng).is_err());
}

#[test]
fn test_field_names_round_through_parse() {
    for field in VectorField::ALL {
        assert_eq!(field.to_string().parse::<VectorField>(), Ok(field));
    }
    assert_eq!("LORENZ_MOD2".parse::<VectorField>(), Ok(VectorField::LorenzMod2));
    assert!(matches!("rossler".parse::<VectorField>(), Err(SketchError::UnknownField(_))));
}

#[test]
fn test_projection_survives_extreme_magnitudes() {
    for raw in [
        Vec3::new(3.0e19, 0.0, 0.0),
        Vec3::new(-2.0e30, 1.0e30, 5.0e29),
        Vec3::new(1.0e-30, 0.0, 0.0),
        Vec3::new(0.0, -3.0e-25, 4.0e-25),
    ] {
        let p = project(raw, 1.125);
        assert!((p.length() - 1.125).abs() < 1e-5, "project({:?}) = {:?}", raw, p);
        assert!(p.dot(raw) > 0.0, "project({:?}) flipped direction: {:?}", raw, p);
    }
}

#[test]
fn test_step_projects_large_finite_state() {
    let mut particles = ParticleSet::new(1);
    particles.raw_position[0] = Vec3::new(2.0e19, 1.0, 1.0);
    step_particles(&mut particles, VectorField::LorenzMod2.function(), 0.0, 1.125, DivergencePolicy::Propagate);
    let p = particles.position[0];
    assert!((p.length() - 1.125).abs() < 1e-5, "pos {:?}", p);
    assert!((p.x - 1.125).abs() < 1e-5, "pos {:?}", p);
}

#[test]
fn test_set_scale_validates() {
    let mut attractor = Attractor::new(&small_config(VectorField::Lorenz), &mut RngSource::seeded(4)).expect("valid config");
    assert!(attractor.set_scale(0.0).is_err());
    assert_eq!(attractor.scale, 1.125);
    attractor.set_scale(3.0).expect("positive scale");
    attractor.step();
    assert!(attractor.particles.position.iter().all(|p| (p.length() - 3.0).abs() < 1e-3));
}
