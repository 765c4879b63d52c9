//! nosh — spin a wheel to decide what to eat.
//!
//! The terminal stand-in for the wheel UI: it owns the clock and the event
//! wiring, feeds simulated 60 Hz ticks (and, for `drag`, a synthetic flick)
//! into the `whirl` core, and renders whatever comes back.

mod config;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use whirl::Wheel;

#[derive(Parser, Debug)]
#[command(name = "nosh", version, about = "Spin a wheel to decide what to eat", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// How many spins to run
    #[arg(short, long, default_value_t = 1)]
    spins: u32,

    /// Seed the throw RNG for reproducible picks
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Write the default config file and print its path
    Setup,
    /// Throw the wheel with a synthetic drag gesture instead of the button
    Drag,
}

/// Simulated display refresh interval.
const TICK_MS: f64 = 16.0;
/// Plenty for any legal throw to decay to the settle threshold.
const MAX_TICKS: u32 = 100_000;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Setup) => {
            let path = config::write_default_config()?;
            println!("wrote {}", path.display());
            Ok(())
        }
        Some(Commands::Drag) => run_drag(),
        None => run_spins(cli.spins, cli.seed),
    }
}

fn run_spins(spins: u32, seed: Option<u64>) -> anyhow::Result<()> {
    let settings = config::load_or_default();
    let mut wheel = Wheel::new(settings.physics, settings.categories.len())?;
    let mut rng = seed.map(StdRng::seed_from_u64);

    for _ in 0..spins {
        let started = match rng.as_mut() {
            Some(rng) => wheel.spin_with_rng(rng),
            None => wheel.on_spin_button(),
        };
        anyhow::ensure!(started, "wheel refused to spin");

        let index = settle(&mut wheel)?;
        println!("🍽  {}", settings.categories[index]);

        // Leave the creep behind before the next throw.
        wheel.halt();
    }
    Ok(())
}

fn run_drag() -> anyhow::Result<()> {
    let settings = config::load_or_default();
    let mut wheel = Wheel::new(settings.physics, settings.categories.len())?;

    // A clockwise flick across a 600x600 wheel: eight pointer samples over
    // ~100 ms along a 200 px radius arc.
    let (center_x, center_y) = (300.0, 300.0);
    let mut now_ms = 0u64;
    wheel.on_drag_start(500.0, 300.0, center_x, center_y, now_ms);
    for i in 1..=8u64 {
        now_ms += 12;
        let theta = (i as f64 * 9.0).to_radians();
        let _ = wheel.on_drag_move(
            center_x + 200.0 * theta.cos(),
            center_y + 200.0 * theta.sin(),
            center_x,
            center_y,
            now_ms,
        );
    }
    anyhow::ensure!(wheel.on_drag_end(), "drag was not accepted");
    log::info!("released with velocity {:.2}", wheel.velocity());

    let index = settle(&mut wheel)?;
    println!("🍽  {}", settings.categories[index]);
    Ok(())
}

fn settle(wheel: &mut Wheel) -> anyhow::Result<usize> {
    for _ in 0..MAX_TICKS {
        if let Some(index) = wheel.on_animation_tick(TICK_MS).settled {
            return Ok(index);
        }
    }
    anyhow::bail!("wheel never settled")
}
