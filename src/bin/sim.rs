use clap::Parser;
use gridshot::{init_logging, GridEngine, FIRST_LETTER, GRID_SIZE, STANDARD_FLEET};
use log::{debug, info};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Fire seeded random shots at the standard fleet and report the outcome.
#[derive(Parser)]
struct Args {
    /// RNG seed for the shot sequence.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Stop after this many legal shots even if ships remain afloat.
    #[arg(long, default_value_t = 500)]
    max_shots: u32,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut grid = GridEngine::new(STANDARD_FLEET);

    let mut hits = 0u32;
    let mut sink_reports = 0u32;
    while grid.shots() < args.max_shots && !grid.all_sunk() {
        let num = rng.random_range(1..=GRID_SIZE);
        let letter = (FIRST_LETTER as u8 + rng.random_range(0..GRID_SIZE)) as char;
        let result = grid
            .shoot(num, &letter.to_string())
            .map_err(|e| anyhow::anyhow!(e))?;
        debug!("shot {} at {}{}: {:?}", grid.shots(), letter, num, result);
        if result.hit {
            hits += 1;
        }
        if result.sunk {
            sink_reports += 1;
            info!("ship sunk at {}{}", letter, num);
        }
    }

    let summary = json!({
        "shots": grid.shots(),
        "hits": hits,
        "sink_reports": sink_reports,
        "fleet_destroyed": grid.all_sunk(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
