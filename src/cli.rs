use crate::config::{ModelConfig, MAX_ANTS_PER_CELL};
use crate::render::MAX_VIEW;
use clap::Parser;

/// CLI arguments for the foraging simulation
#[derive(Parser, Debug)]
#[command(name = "ant_foraging", about = "🐜 Pheromone-trail ant foraging simulator")]
pub struct Args {
    /// Number of ants placed in the nest
    #[arg(short = 'n', long = "ants", default_value_t = 100)]
    pub ants: usize,

    /// Number of ticks to run
    #[arg(short = 't', long = "ticks", default_value_t = 500)]
    pub ticks: u64,

    /// Probability that a newly explored cell holds food
    #[arg(short = 'f', long = "food", default_value_t = 0.1)]
    pub food: f64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum ants per cell
    #[arg(long, default_value_t = MAX_ANTS_PER_CELL)]
    pub capacity: usize,

    /// Draw the grid every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    pub render_every: u64,

    /// Half-width of the drawn window around the nest
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(i32).range(0..=MAX_VIEW as i64))]
    pub view: i32,

    /// Only log warnings (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Args {
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::default().with_capacity(self.capacity)
    }
}
