//! Integration tests for drape-solver.

use drape_solver::collision::{CollisionHandler, CollisionSphere, ContactLatch};
use drape_solver::elastic::{spring_term, ElasticForceModel};
use drape_solver::friction::FrictionModel;
use drape_solver::integrator::Integrator;
use drape_solver::observer::{Fanout, NullObserver, StepObserver};
use drape_solver::scheduler::{SchedulerState, StepReport, StepScheduler};
use drape_solver::stencil::SpringKind;
use drape_solver::{DVec3, ForceModel, ParticleGrid, SimulationConfig, SimulationContext};
use drape_types::constants::SHEAR_REST_LENGTH;
use drape_types::GridIndex;
use test_case::test_case;

/// Counts notifications so tests can check scheduler side effects.
#[derive(Default)]
struct CountingObserver {
    steps: u32,
    stopped: u32,
    last_timestep: u32,
}

impl StepObserver for CountingObserver {
    fn on_step(&mut self, report: &StepReport, _ctx: &SimulationContext) {
        self.steps += 1;
        self.last_timestep = report.timestep;
    }

    fn on_stopped(&mut self, _report: &StepReport) {
        self.stopped += 1;
    }

    fn name(&self) -> &str {
        "counting"
    }
}

fn two_by_two_config() -> SimulationConfig {
    SimulationConfig {
        grid_size: 2,
        mass: 1.0,
        stiffness: 100.0,
        friction: 0.0,
        gravity: [0.0, 0.0, 10.0],
        initial_height: 0.0,
        dt: 0.03,
        ..Default::default()
    }
}

fn far_sphere(config: SimulationConfig) -> SimulationConfig {
    SimulationConfig {
        sphere_center: Some([1000.0, 1000.0, 1000.0]),
        ..config
    }
}

// ─── SimulationConfig Tests ───────────────────────────────────

#[test]
fn config_default_is_reference() {
    let config = SimulationConfig::default();
    assert_eq!(config.grid_size, 30);
    assert_eq!(config.mass, 0.3);
    assert_eq!(config.stiffness, 100.0);
    assert_eq!(config.friction, 0.05);
    assert_eq!(config.gravity, [0.0, 0.0, 10.0]);
    assert_eq!(config.initial_height, 100.0);
    assert_eq!(config.dt, 0.03);
    assert_eq!(config.sphere_radius, 5.0);
    assert_eq!(config.timer_interval_ms, 1);
    assert_eq!(config.momentum_threshold, 100.0);
    assert_eq!(config, SimulationConfig::reference());
}

#[test]
fn config_default_sphere_center() {
    let config = SimulationConfig::default();
    let center = config.sphere_center_vec();
    assert_eq!(center.x, 15.0);
    assert_eq!(center.y, 15.0);
    assert!((center.z - 70.0).abs() < 1e-4);
}

#[test]
fn config_sphere_center_uses_integer_half() {
    let config = SimulationConfig {
        grid_size: 5,
        ..Default::default()
    };
    assert_eq!(config.sphere_center_vec().x, 2.0);
}

#[test]
fn config_explicit_sphere_center() {
    let config = SimulationConfig {
        sphere_center: Some([1.0, 2.0, 3.0]),
        ..Default::default()
    };
    assert_eq!(config.sphere_center_vec(), DVec3::new(1.0, 2.0, 3.0));
}

#[test]
fn config_rejects_empty_grid() {
    let config = SimulationConfig {
        grid_size: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
    assert!(SimulationContext::new(config).is_err());
}

#[test]
fn config_rejects_zero_mass() {
    let config = SimulationConfig {
        mass: 0.0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_serialization() {
    let config = SimulationConfig::small();
    let toml = toml::to_string(&config).unwrap();
    let recovered: SimulationConfig = toml::from_str(&toml).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn config_partial_toml_fills_defaults() {
    let config: SimulationConfig = toml::from_str("grid_size = 12\nstiffness = 50.0\n").unwrap();
    assert_eq!(config.grid_size, 12);
    assert_eq!(config.stiffness, 50.0);
    assert_eq!(config.mass, 0.3);
    assert!(config.sphere_center.is_none());
}

// ─── ParticleGrid Tests ───────────────────────────────────────

#[test]
fn grid_rejects_zero_size() {
    assert!(ParticleGrid::new(0).is_err());
}

#[test]
fn grid_flat_sheet_layout() {
    let grid = ParticleGrid::flat_sheet(4, 100.0).unwrap();
    assert_eq!(grid.size(), 4);
    assert_eq!(grid.len(), 16);
    assert_eq!(grid.position(GridIndex::new(2, 3)), DVec3::new(2.0, 3.0, 100.0));
    assert!(grid.velocities().iter().all(|&v| v == DVec3::ZERO));
}

#[test]
fn grid_from_parts_checks_lengths() {
    let result = ParticleGrid::from_parts(2, vec![DVec3::ZERO; 4], vec![DVec3::ZERO; 3]);
    assert!(result.is_err());
}

#[test]
fn grid_offset_is_bounds_checked() {
    let grid = ParticleGrid::new(3).unwrap();
    assert_eq!(grid.offset(GridIndex::new(2, 1)), Some(7));
    assert_eq!(grid.offset(GridIndex::new(3, 0)), None);
}

#[test]
fn grid_indices_are_row_major() {
    let grid = ParticleGrid::new(2).unwrap();
    let indices: Vec<_> = grid.indices().collect();
    assert_eq!(
        indices,
        vec![
            GridIndex::new(0, 0),
            GridIndex::new(0, 1),
            GridIndex::new(1, 0),
            GridIndex::new(1, 1),
        ]
    );
}

#[test_case(0, 0, 3 ; "corner")]
#[test_case(4, 4, 3 ; "far corner")]
#[test_case(0, 2, 5 ; "top edge")]
#[test_case(2, 4, 5 ; "right edge")]
#[test_case(2, 2, 8 ; "interior")]
fn neighbor_count(i: usize, j: usize, expected: usize) {
    let grid = ParticleGrid::new(5).unwrap();
    let neighbors: Vec<_> = grid.neighbors(GridIndex::new(i, j)).collect();
    assert_eq!(neighbors.len(), expected);
    assert!(neighbors.iter().all(|(n, _)| grid.contains(*n)));
}

#[test]
fn corner_neighbors_are_exactly_three() {
    let grid = ParticleGrid::new(4).unwrap();
    let mut neighbors: Vec<_> = grid.neighbors(GridIndex::new(0, 0)).collect();
    neighbors.sort_by_key(|(n, _)| *n);
    assert_eq!(
        neighbors,
        vec![
            (GridIndex::new(0, 1), SpringKind::Structural),
            (GridIndex::new(1, 0), SpringKind::Structural),
            (GridIndex::new(1, 1), SpringKind::Shear),
        ]
    );
}

#[test]
fn single_particle_grid_has_no_neighbors() {
    let grid = ParticleGrid::new(1).unwrap();
    assert_eq!(grid.neighbors(GridIndex::new(0, 0)).count(), 0);
}

// ─── Elastic Force Tests ──────────────────────────────────────

#[test]
fn flat_sheet_has_zero_elastic_force() {
    let grid = ParticleGrid::flat_sheet(6, 100.0).unwrap();
    let model = ElasticForceModel::new(100.0);
    let mut out = vec![DVec3::ONE; grid.len()];
    model.compute(&grid, &mut out);
    assert!(out.iter().all(|&f| f == DVec3::ZERO));
}

#[test]
fn spring_term_is_antisymmetric() {
    let a = DVec3::new(0.3, -1.2, 4.0);
    let b = DVec3::new(1.7, 0.4, 3.1);
    for rest in [1.0, SHEAR_REST_LENGTH] {
        assert_eq!(spring_term(a, b, rest), -spring_term(b, a, rest));
    }
}

#[test]
fn spring_pair_forces_are_equal_and_opposite() {
    // Stretch the (0,0)-(1,0) spring to 1.5.
    let positions = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.5, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
    ];
    let grid = ParticleGrid::from_parts(2, positions, vec![DVec3::ZERO; 4]).unwrap();
    let a = grid.position(GridIndex::new(0, 0));
    let b = grid.position(GridIndex::new(1, 0));
    let from_a = spring_term(a, b, 1.0) * 100.0;
    let from_b = spring_term(b, a, 1.0) * 100.0;
    assert_eq!(from_a, -from_b);
    assert!(from_a.x > 0.0, "stretched spring pulls a toward b");
}

#[test]
fn elastic_forces_sum_to_zero() {
    let size = 4;
    let mut positions = ParticleGrid::flat_sheet(size, 0.0).unwrap().positions().to_vec();
    for (k, p) in positions.iter_mut().enumerate() {
        let s = k as f64;
        *p += DVec3::new((s * 0.37).sin() * 0.2, (s * 0.91).cos() * 0.2, (s * 0.13).sin() * 0.3);
    }
    let grid = ParticleGrid::from_parts(size, positions, vec![DVec3::ZERO; size * size]).unwrap();
    let mut out = vec![DVec3::ZERO; grid.len()];
    ElasticForceModel::new(100.0).compute(&grid, &mut out);

    let total: DVec3 = out.iter().copied().sum();
    assert!(total.length() < 1e-2, "net internal force = {total:?}");
}

#[test]
fn coincident_neighbors_give_zero_contribution() {
    let grid = ParticleGrid::new(2).unwrap(); // everything at the origin
    let model = ElasticForceModel::new(100.0);
    let f = model.force_at(&grid, GridIndex::new(0, 0));
    assert_eq!(f, DVec3::ZERO);
    assert!(f.is_finite());
}

#[test]
fn parallel_compute_matches_per_particle_force() {
    let size = 7;
    let mut positions = ParticleGrid::flat_sheet(size, 50.0).unwrap().positions().to_vec();
    for (k, p) in positions.iter_mut().enumerate() {
        let s = k as f64;
        *p += DVec3::new((s * 1.3).sin() * 0.4, (s * 0.7).cos() * 0.3, (s * 2.1).sin() * 0.5);
    }
    let grid = ParticleGrid::from_parts(size, positions, vec![DVec3::ZERO; size * size]).unwrap();
    let model = ElasticForceModel::new(100.0);
    let mut out = vec![DVec3::ZERO; grid.len()];
    model.compute(&grid, &mut out);

    for idx in grid.indices() {
        assert_eq!(out[idx.flat(size)], model.force_at(&grid, idx), "mismatch at {idx:?}");
    }
    assert!(out.iter().any(|f| f.length() > 1.0));
}

#[test]
fn compressed_spring_pushes_apart() {
    let positions = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.5, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
    ];
    let grid = ParticleGrid::from_parts(2, positions, vec![DVec3::ZERO; 4]).unwrap();
    let b = grid.position(GridIndex::new(1, 0));
    let term = spring_term(DVec3::ZERO, b, 1.0);
    assert!(term.x < 0.0);
}

// ─── Friction Tests ───────────────────────────────────────────

#[test_case(0, 0, 3.0 ; "corner sums three")]
#[test_case(0, 1, 5.0 ; "edge sums five")]
#[test_case(1, 1, 8.0 ; "center sums eight")]
fn friction_sums_existing_neighbors(i: usize, j: usize, neighbors: f64) {
    let grid = ParticleGrid::from_parts(3, vec![DVec3::ZERO; 9], vec![DVec3::X; 9]).unwrap();
    let model = FrictionModel::new(0.05);
    let f = model.force_at(&grid, GridIndex::new(i, j));
    assert!((f.x - neighbors * 0.05).abs() < 1e-6);
    assert_eq!(f.y, 0.0);
}

#[test]
fn friction_excludes_own_velocity() {
    let mut velocities = vec![DVec3::ZERO; 9];
    velocities[GridIndex::new(1, 1).flat(3)] = DVec3::new(0.0, 0.0, 7.0);
    let grid = ParticleGrid::from_parts(3, vec![DVec3::ZERO; 9], velocities).unwrap();
    let mut out = vec![DVec3::ONE; 9];
    FrictionModel::new(1.0).compute(&grid, &mut out);
    assert_eq!(out[GridIndex::new(1, 1).flat(3)], DVec3::ZERO);
    assert_eq!(out[GridIndex::new(0, 0).flat(3)], DVec3::new(0.0, 0.0, 7.0));
}

// ─── Collision Tests ──────────────────────────────────────────

#[test]
fn sphere_margin_is_radius_plus_one() {
    let sphere = CollisionSphere::new(DVec3::ZERO, 5.0);
    assert!(!sphere.is_clear(DVec3::new(6.0, 0.0, 0.0)));
    assert!(sphere.is_clear(DVec3::new(6.01, 0.0, 0.0)));
}

#[test]
fn contact_latch_is_one_way() {
    let mut latch = ContactLatch::new();
    assert!(!latch.is_set());
    assert!(latch.latch());
    assert!(!latch.latch());
    assert!(latch.is_set());
}

#[test]
fn contact_survives_later_clear_particles() {
    let mut handler = CollisionHandler::new(CollisionSphere::new(DVec3::ZERO, 1.0));
    assert!(!handler.admit(DVec3::new(0.5, 0.0, 0.0)));
    assert!(handler.contact());
    for k in 0..10 {
        assert!(handler.admit(DVec3::new(10.0 + k as f64, 0.0, 0.0)));
        assert!(handler.contact());
    }
}

// ─── Integrator Tests ─────────────────────────────────────────

#[test]
fn acceleration_uses_twice_the_mass() {
    let integrator = Integrator::new(0.3, DVec3::new(0.0, 0.0, 10.0), 0.03);
    let a = integrator.acceleration(DVec3::new(0.6, 0.0, 0.0), DVec3::new(0.0, 0.3, 0.0));
    assert!((a.x - 1.0).abs() < 1e-6);
    assert!((a.y + 0.5).abs() < 1e-6);
    assert!((a.z + 5.0).abs() < 1e-6);
}

#[test]
fn zero_forces_keep_velocity_and_drift_position() {
    let v = DVec3::new(1.0, -2.0, 0.5);
    let p0 = DVec3::new(3.0, 4.0, 5.0);
    let mut grid = ParticleGrid::from_parts(1, vec![p0], vec![v]).unwrap();
    let integrator = Integrator::new(1.0, DVec3::ZERO, 0.03);
    let mut collision = CollisionHandler::new(CollisionSphere::new(DVec3::splat(1000.0), 1.0));

    let outcome = integrator.integrate(&mut grid, &[DVec3::ZERO], &[DVec3::ZERO], &mut collision);

    let idx = GridIndex::new(0, 0);
    assert_eq!(grid.velocity(idx), v);
    assert_eq!(grid.position(idx), p0 + v * 0.03);
    assert_eq!(outcome.momentum, v);
    assert_eq!(outcome.held, 0);
}

#[test]
fn held_particle_updates_velocity_but_not_position() {
    let p0 = DVec3::new(0.0, 0.0, 1.0);
    let mut grid = ParticleGrid::from_parts(1, vec![p0], vec![DVec3::ZERO]).unwrap();
    let integrator = Integrator::new(1.0, DVec3::new(0.0, 0.0, 10.0), 0.03);
    let mut collision = CollisionHandler::new(CollisionSphere::new(DVec3::ZERO, 5.0));

    let outcome = integrator.integrate(&mut grid, &[DVec3::ZERO], &[DVec3::ZERO], &mut collision);

    let idx = GridIndex::new(0, 0);
    assert_eq!(grid.position(idx), p0);
    assert!((grid.velocity(idx).z + 0.15).abs() < 1e-6);
    assert_eq!(outcome.momentum, DVec3::ZERO);
    assert_eq!(outcome.held, 1);
    assert!(collision.contact());
}

// ─── SimulationContext Tests ──────────────────────────────────

#[test]
fn two_by_two_first_step() {
    let mut ctx = SimulationContext::new(two_by_two_config()).unwrap();
    ctx.step();

    for idx in ctx.grid().indices() {
        assert_eq!(ctx.elastic_force(idx), DVec3::ZERO);
        assert_eq!(ctx.grid().acceleration(idx), DVec3::new(0.0, 0.0, -5.0));
    }
}

#[test]
fn two_by_two_free_fall_advances_positions() {
    let mut ctx = SimulationContext::new(far_sphere(two_by_two_config())).unwrap();
    let outcome = ctx.step();

    let v = -5.0f64 * 0.03;
    for idx in ctx.grid().indices() {
        assert_eq!(ctx.grid().velocity(idx), DVec3::new(0.0, 0.0, v));
        let expected = DVec3::new(idx.i as f64, idx.j as f64, 0.0) + DVec3::new(0.0, 0.0, v) * 0.03;
        assert_eq!(ctx.grid().position(idx), expected);
    }
    assert!((outcome.momentum.z - 4.0 * v).abs() < 1e-6);
    assert!(!ctx.contact());
    assert_eq!(ctx.timestep(), 1);
}

#[test]
fn two_by_two_under_sphere_is_held() {
    // Default center (1, 1, 0) with R = 5 covers every particle.
    let mut ctx = SimulationContext::new(two_by_two_config()).unwrap();
    let before = ctx.grid().positions().to_vec();
    let outcome = ctx.step();
    assert_eq!(ctx.grid().positions(), before.as_slice());
    assert_eq!(outcome.held, 4);
    assert_eq!(ctx.momentum(), DVec3::ZERO);
    assert!(ctx.contact());
}

#[test]
fn context_rejects_mismatched_grid() {
    let grid = ParticleGrid::flat_sheet(3, 0.0).unwrap();
    assert!(SimulationContext::with_grid(two_by_two_config(), grid).is_err());
}

#[test]
fn frame_exposes_positions_and_force_magnitudes() {
    let mut ctx = SimulationContext::new(SimulationConfig::small()).unwrap();
    ctx.step();
    let frame = ctx.frame();
    assert_eq!(frame.grid_size, 10);
    assert_eq!(frame.particle_count(), 100);
    assert_eq!(frame.timestep, 1);
    let idx = GridIndex::new(3, 7);
    assert_eq!(frame.position(idx), ctx.grid().position(idx).as_vec3());
    assert_eq!(frame.force_magnitude(idx), ctx.elastic_force(idx).length() as f32);
    assert_eq!(frame.sphere.center, ctx.sphere_center());
    assert_eq!(frame.sphere.radius, ctx.sphere_radius());
}

#[test]
#[should_panic(expected = "outside 3x3 grid")]
fn elastic_force_rejects_out_of_range_column() {
    let mut ctx = SimulationContext::new(SimulationConfig {
        grid_size: 3,
        ..SimulationConfig::small()
    })
    .unwrap();
    ctx.step();
    // (0, 4) flattens to 4, which is (1, 1) on a 3x3 grid.
    ctx.elastic_force(GridIndex::new(0, 4));
}

#[test]
#[should_panic(expected = "outside 3x3 frame")]
fn frame_position_rejects_out_of_range_column() {
    let ctx = SimulationContext::new(SimulationConfig {
        grid_size: 3,
        ..SimulationConfig::small()
    })
    .unwrap();
    ctx.frame().position(GridIndex::new(0, 4));
}

#[test]
#[should_panic(expected = "outside 3x3 frame")]
fn frame_force_magnitude_rejects_out_of_range_column() {
    let ctx = SimulationContext::new(SimulationConfig {
        grid_size: 3,
        ..SimulationConfig::small()
    })
    .unwrap();
    ctx.frame().force_magnitude(GridIndex::new(0, 4));
}

#[test]
fn kinetic_energy_of_uniform_fall() {
    let mut ctx = SimulationContext::new(far_sphere(two_by_two_config())).unwrap();
    assert_eq!(ctx.kinetic_energy(), 0.0);
    ctx.step();
    let v = 0.15f64;
    assert!((ctx.kinetic_energy() - 4.0 * 0.5 * v * v).abs() < 1e-6);
}

#[test]
fn small_sheet_falls_and_touches_sphere() {
    let mut ctx = SimulationContext::new(SimulationConfig::small()).unwrap();
    let start_z = ctx.grid().position(GridIndex::new(5, 5)).z;
    let mut touched_at = None;
    for step in 0..300 {
        ctx.step();
        if ctx.contact() {
            touched_at = Some(step);
            break;
        }
    }
    assert!(touched_at.is_some(), "sheet never reached the sphere");
    assert!(ctx.grid().position(GridIndex::new(5, 5)).z < start_z);
    assert!(ctx.grid().positions().iter().all(|p| p.is_finite()));
}

#[test]
fn contact_stays_latched_over_many_steps() {
    let mut ctx = SimulationContext::new(SimulationConfig::small()).unwrap();
    let mut seen = false;
    for _ in 0..400 {
        ctx.step();
        if seen {
            assert!(ctx.contact());
        }
        seen |= ctx.contact();
    }
}

// ─── StepScheduler Tests ──────────────────────────────────────

#[test]
fn continue_predicate() {
    let scheduler = StepScheduler::new(100.0);
    assert!(scheduler.should_continue(DVec3::ZERO, false));
    assert!(scheduler.should_continue(DVec3::new(0.0, 0.0, 101.0), true));
    assert!(!scheduler.should_continue(DVec3::new(0.0, 0.0, 100.0), true));
    assert!(!scheduler.should_continue(DVec3::ZERO, true));
}

#[test]
fn scheduler_stops_when_still_and_touching() {
    let config = two_by_two_config();
    let mut ctx = SimulationContext::new(config.clone()).unwrap();
    let mut scheduler = StepScheduler::from_config(&config);
    let mut observer = CountingObserver::default();

    let report = scheduler.advance(&mut ctx, &mut observer).unwrap();
    assert_eq!(report.momentum, DVec3::ZERO);
    assert!(report.contact);
    assert_eq!(report.state, SchedulerState::Stopped);
    assert!(!report.rearm());
    assert_eq!(scheduler.state(), SchedulerState::Stopped);
    assert_eq!(observer.steps, 1);
    assert_eq!(observer.stopped, 1);

    let positions = ctx.grid().positions().to_vec();
    let velocities = ctx.grid().velocities().to_vec();
    for _ in 0..5 {
        assert!(scheduler.advance(&mut ctx, &mut observer).is_none());
    }
    assert_eq!(ctx.grid().positions(), positions.as_slice());
    assert_eq!(ctx.grid().velocities(), velocities.as_slice());
    assert_eq!(ctx.timestep(), 1);
    assert_eq!(observer.steps, 1);
    assert_eq!(observer.stopped, 1);
}

#[test]
fn scheduler_keeps_running_without_contact() {
    let config = far_sphere(two_by_two_config());
    let mut ctx = SimulationContext::new(config.clone()).unwrap();
    let mut scheduler = StepScheduler::from_config(&config);
    let mut observer = CountingObserver::default();

    for _ in 0..20 {
        let report = scheduler.advance(&mut ctx, &mut observer).unwrap();
        assert!(report.rearm());
    }
    assert!(scheduler.is_running());
    assert_eq!(observer.steps, 20);
    assert_eq!(observer.last_timestep, 20);
    assert_eq!(observer.stopped, 0);
}

#[test]
fn reference_run_touches_at_155_and_stops_at_290() {
    let config = SimulationConfig::reference();
    let mut ctx = SimulationContext::new(config.clone()).unwrap();
    let mut scheduler = StepScheduler::from_config(&config);
    let mut first_contact = None;
    let mut stopped_at = None;

    for _ in 0..1000 {
        let Some(report) = scheduler.advance(&mut ctx, &mut NullObserver) else {
            break;
        };
        if report.contact && first_contact.is_none() {
            first_contact = Some(report.timestep);
        }
        if report.state == SchedulerState::Stopped {
            stopped_at = Some(report.timestep);
        }
    }

    assert_eq!(first_contact, Some(155));
    assert_eq!(stopped_at, Some(290));
    assert_eq!(ctx.timestep(), 290);
}

#[test]
fn resumed_stopped_scheduler_ignores_ticks() {
    let mut ctx = SimulationContext::new(SimulationConfig::small()).unwrap();
    let mut scheduler = StepScheduler::resume(SchedulerState::Stopped, 100.0);
    assert!(scheduler.advance(&mut ctx, &mut NullObserver).is_none());
    assert_eq!(ctx.timestep(), 0);
}

#[test]
fn fanout_notifies_every_observer() {
    let config = two_by_two_config();
    let mut ctx = SimulationContext::new(config.clone()).unwrap();
    let mut scheduler = StepScheduler::from_config(&config);
    let mut a = CountingObserver::default();
    let mut b = CountingObserver::default();
    {
        let mut fanout = Fanout::new().with(&mut a).with(&mut b);
        assert_eq!(fanout.len(), 2);
        scheduler.advance(&mut ctx, &mut fanout);
    }
    assert_eq!((a.steps, a.stopped), (1, 1));
    assert_eq!((b.steps, b.stopped), (1, 1));
}
