//! CLI command implementations.

use std::path::{Path, PathBuf};

use clap::Args;

use drape_bench::metrics::BenchmarkMetrics;
use drape_bench::runner::{BenchmarkRunner, Runner};
use drape_bench::scenarios::{Scenario, ScenarioKind};
use drape_debug::hooks::TelemetryHook;
use drape_debug::snapshot::StateSnapshot;
use drape_render::{Camera, ClothTopology, JsonFrameExporter, RenderObserver, Renderer};
use drape_solver::{Fanout, SimulationConfig, SimulationContext, StepScheduler};
use drape_telemetry::{EventBus, JsonLinesSink, TracingSink};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Options for `drape simulate`.
#[derive(Args)]
pub struct SimulateArgs {
    /// Simulation config (TOML). The reference configuration if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Continue from a snapshot instead of a fresh flat sheet.
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Stop delivering ticks after this many.
    #[arg(long)]
    max_steps: Option<u32>,

    /// Sleep the configured timer interval between ticks.
    #[arg(long)]
    realtime: bool,

    /// Write every frame to a JSON animation file.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write the final state to a binary snapshot.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Write telemetry events as JSON lines.
    #[arg(long)]
    events: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let config: SimulationConfig = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => SimulationConfig::reference(),
    };
    config.validate()?;
    Ok(config)
}

/// Run a simulation until it stops or hits the step cap.
pub fn simulate(args: &SimulateArgs) -> CommandResult {
    let config = load_config(args.config.as_deref())?;

    println!("drape simulation");
    println!("────────────────");
    println!("Grid:       {0}x{0} ({1} particles)", config.grid_size, config.particle_count());
    println!("Sphere:     center {:?}, radius {}", config.sphere_center_vec(), config.sphere_radius);
    println!("dt:         {}s", config.dt);
    println!();

    let (mut ctx, mut scheduler) = match &args.resume {
        Some(path) => {
            let snapshot = StateSnapshot::from_bytes(&std::fs::read(path)?)?;
            println!("Resuming from step {} ({})", snapshot.timestep, path.display());
            snapshot.restore(config.clone())?
        }
        None => {
            let scheduler = StepScheduler::from_config(&config);
            (SimulationContext::new(config.clone())?, scheduler)
        }
    };

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::DEBUG)));
    if let Some(path) = &args.events {
        bus.add_sink(Box::new(JsonLinesSink::create(path)?));
    }
    let mut hook = TelemetryHook::resumed(bus, ctx.contact());

    let mut render = match &args.export {
        Some(path) => {
            let mut exporter =
                JsonFrameExporter::new(path).with_camera(Camera::overview(config.initial_height));
            exporter.init(&ClothTopology::new(config.grid_size))?;
            Some(RenderObserver::new(exporter))
        }
        None => None,
    };

    let mut runner = Runner::new();
    if let Some(cap) = args.max_steps {
        runner = runner.with_max_ticks(cap);
    }
    if args.realtime {
        runner = runner.realtime(config.timer_interval());
    }

    let summary = {
        let mut fanout = Fanout::new().with(&mut hook);
        if let Some(render) = render.as_mut() {
            fanout = fanout.with(render);
        }
        runner.run(&mut ctx, &mut scheduler, &mut fanout)
    };
    hook.finalize();

    if let Some(render) = render {
        let exporter = render.finish()?;
        if let Some(path) = &args.export {
            println!("Frames written to: {} ({} frames)", path.display(), summary.steps);
        }
        tracing::debug!(renderer = exporter.name(), "renderer finalized");
    }

    if let Some(path) = &args.snapshot {
        let bytes = StateSnapshot::capture(&ctx, scheduler.state()).to_bytes()?;
        std::fs::write(path, bytes)?;
        println!("Snapshot written to: {}", path.display());
    }

    println!();
    println!("Steps:      {}", summary.steps);
    println!("Sim time:   {:.3}s", ctx.sim_time());
    match summary.contact_step {
        Some(step) => println!("Contact:    step {step}"),
        None => println!("Contact:    none"),
    }
    println!("Momentum:   {:.4}", summary.final_momentum.length());
    println!("Kinetic E:  {:.6e}", ctx.kinetic_energy());
    println!(
        "State:      {}",
        if summary.stopped { "at rest (stopped)" } else { "running (step cap reached)" }
    );

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    max_ticks: Option<u32>,
    output_path: Option<&Path>,
) -> CommandResult {
    println!("drape benchmark suite");
    println!("═════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![scenario_name.parse()?]
    };

    let mut all_metrics = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(cap) = max_ticks {
            scenario = scenario.with_max_ticks(cap);
        }

        println!(
            "Running: {} ({} particles, cap {} ticks)",
            kind,
            scenario.config.particle_count(),
            scenario.max_ticks
        );

        let metrics = BenchmarkRunner::run(&scenario)
            .map_err(|e| format!("benchmark {kind} failed: {e}"))?;

        println!("  Steps:         {} ({})", metrics.steps, if metrics.stopped { "stopped" } else { "capped" });
        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {}", path.display());
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &Path) -> CommandResult {
    println!("drape snapshot inspector");
    println!("────────────────────────");
    println!();

    let snapshot = StateSnapshot::from_bytes(&std::fs::read(path)?)?;

    println!("Timestep:   {}", snapshot.timestep);
    println!("Sim time:   {:.4}s", snapshot.sim_time);
    println!("Grid:       {0}x{0}", snapshot.grid_size);
    println!("Particles:  {}", snapshot.particle_count());
    println!("Contact:    {}", snapshot.contact);
    println!("State:      {:?}", snapshot.state);

    if !snapshot.positions.is_empty() {
        let (min_z, max_z) = snapshot
            .positions
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.z), hi.max(p.z))
            });
        let max_speed = snapshot
            .velocities
            .iter()
            .map(|v| v.length())
            .fold(0.0f64, f64::max);
        println!("Centroid:   {:?}", snapshot.centroid());
        println!("Z range:    [{min_z:.4}, {max_z:.4}]");
        println!("Max speed:  {max_speed:.4}");
    }

    Ok(())
}

/// Validate a config or snapshot.
pub fn validate(path: &Path) -> CommandResult {
    println!("drape validator");
    println!("───────────────");
    println!();

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            println!("Validating config: {}", path.display());
            let config = load_config(Some(path))?;
            println!("Grid {0}x{0}, sphere at {1:?}", config.grid_size, config.sphere_center_vec());
            println!("✅ Config is valid.");
        }
        Some("bin") => {
            println!("Validating snapshot: {}", path.display());
            let snapshot = StateSnapshot::from_bytes(&std::fs::read(path)?)?;
            let expected = snapshot.grid_size * snapshot.grid_size;
            if snapshot.positions.len() != expected || snapshot.velocities.len() != expected {
                return Err(format!(
                    "snapshot holds {} positions and {} velocities for a {}x{} grid",
                    snapshot.positions.len(),
                    snapshot.velocities.len(),
                    snapshot.grid_size,
                    snapshot.grid_size
                )
                .into());
            }
            println!("✅ Snapshot is valid ({} particles).", expected);
        }
        _ => return Err(format!("unsupported file type: {}", path.display()).into()),
    }

    Ok(())
}
