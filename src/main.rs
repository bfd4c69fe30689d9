use ant_foraging::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.quiet);

    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Build model, seed food, release ants
    let mut model = Model::with_source(args.model_config(), rng)?;
    model.seed_food(args.food)?;
    model.add_ants(args.ants)?;

    // Run simulation
    let mut engine = SimulationEngine::new(&args);
    let mut renderer = AsciiRenderer::new(args.view);
    let simulation_time = engine.run_simulation(&mut model, &mut renderer)?;

    // Print results
    engine.print_summary(&model, &args, simulation_time);

    Ok(())
}

/// Log to stderr so the summary on stdout stays clean. `RUST_LOG` wins
/// unless `--quiet` is set.
fn init_tracing(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
