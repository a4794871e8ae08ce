//! Generates a dungeon and prints it to stdout.
//!
//! Usage: `bsp-dungeon [options.ron]`

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bsp_dungeon::{DungeonBuilder, GeneratorOptions};

const MAP_WIDTH: i32 = 80;
const MAP_HEIGHT: i32 = 25;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match std::env::args().nth(1) {
        Some(path) => GeneratorOptions::load(&path)
            .with_context(|| format!("loading generator options from {}", path))?,
        None => GeneratorOptions::default().with_fill(true),
    };
    log::debug!("Generator options: {:?}", options);

    let mut rng = StdRng::from_entropy();
    let dungeon = DungeonBuilder::new(options).generate(MAP_WIDTH, MAP_HEIGHT, &mut rng)?;
    print!("{}", dungeon.render());

    Ok(())
}
