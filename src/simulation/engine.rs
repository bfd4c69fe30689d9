use crate::cli::Args;
use crate::error::Result;
use crate::random::RandomSource;
use crate::render::Renderer;
use crate::simulation::model::Model;
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::warn;

/// Drives a model tick by tick and reports on the run
pub struct SimulationEngine {
    ticks: u64,
    render_every: u64,
}

impl SimulationEngine {
    pub fn new(args: &Args) -> Self {
        Self {
            ticks: args.ticks,
            render_every: args.render_every,
        }
    }

    /// Run every tick, handing the model to `renderer` every
    /// `render_every` ticks (never when zero). Returns wall time spent.
    pub fn run_simulation<R, V>(&mut self, model: &mut Model<R>, renderer: &mut V) -> Result<Duration>
    where
        R: RandomSource,
        V: Renderer,
    {
        let sim_start = Instant::now();

        for _ in 0..self.ticks {
            model.advance_tick()?;

            if self.render_every > 0 && model.tick() % self.render_every == 0 {
                // A broken terminal shouldn't stop the run
                if let Err(err) = renderer.render(model) {
                    warn!(%err, "render failed; disabling rendering");
                    self.render_every = 0;
                }
            }
        }

        Ok(sim_start.elapsed())
    }

    /// Print simulation summary
    pub fn print_summary<R: RandomSource>(
        &self,
        model: &Model<R>,
        args: &Args,
        simulation_time: Duration,
    ) {
        let stats = model.stats();
        let busiest = model.occupancy().busiest();
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            format!("({} ticks)", stats.ticks).dimmed(),
            "|".dimmed(),
            format!("ants={}", args.ants).cyan(),
            format!("delivered={}", stats.deliveries).cyan(),
            format!("pickups={}", stats.pickups).cyan(),
            format!("carrying={}", model.carrying_count()).cyan(),
            format!("explored={}", model.grid().len()).cyan(),
            format!("food_left={}", model.food_remaining()).cyan(),
        );
        if busiest >= model.config().max_ants_per_cell {
            println!(
                "{} {}",
                "⚠️ ".yellow(),
                format!("busiest cell holds {} ants (capacity {})", busiest, model.config().max_ants_per_cell)
                    .yellow()
            );
        }
    }
}
