//! Undercroft - Entry Point
//!
//! Generates a run of floors from a seed and prints each one as ASCII,
//! followed by what spawned on it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use undercroft::data::{export_default_data, DataManager, DEFAULT_DATA_DIR};
use undercroft::{Floor, MessageLog};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "undercroft")]
#[command(about = "Generate and inspect roguelike dungeon floors")]
#[command(version)]
struct Args {
    /// Random seed for floor generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of floors to descend through
    #[arg(short, long, default_value_t = 1)]
    floors: u32,

    /// Directory holding config.ron and spawns.ron
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    data: PathBuf,

    /// Write the default data files into the data directory and exit
    #[arg(long)]
    export_defaults: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::info!("Starting Undercroft v{}", env!("CARGO_PKG_VERSION"));

    if args.export_defaults {
        export_default_data(&args.data)
            .with_context(|| format!("writing defaults to {}", args.data.display()))?;
        println!("Wrote default data files to {}", args.data.display());
        return Ok(());
    }

    let data = DataManager::load_from(&args.data);
    let config = data.game_config();
    config
        .dungeon
        .validate()
        .context("invalid dungeon configuration")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut messages = MessageLog::default();

    println!("Seed: {seed}");

    let mut floor = Floor::new(&mut rng, config, data.spawn_tables(), config.new_player())
        .context("generating first floor")?;
    print_floor(&floor);

    for _ in 1..args.floors {
        floor
            .next_floor(&mut rng, &mut messages, config)
            .with_context(|| format!("generating floor {}", floor.depth() + 1))?;
        print_floor(&floor);
    }

    for message in messages.messages() {
        println!("> {}", message.text);
    }

    Ok(())
}

/// Draw the map with entity glyphs on top, then a tally of spawns
fn print_floor(floor: &Floor) {
    let mut rows: Vec<Vec<char>> = floor
        .map
        .to_ascii()
        .into_iter()
        .map(|row| row.chars().collect())
        .collect();

    let mut drawn: Vec<_> = floor.entities().iter().collect();
    drawn.sort_by_key(|e| e.render_order);
    for entity in drawn {
        let (x, y) = (entity.pos.x as usize, entity.pos.y as usize);
        if let Some(cell) = rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = entity.glyph;
        }
    }

    println!();
    println!("=== Floor {} ({} rooms) ===", floor.depth(), floor.rooms().len());
    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }

    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for entity in floor.entities().iter().skip(1) {
        if entity.stairs.is_none() {
            *tally.entry(entity.name.as_str()).or_default() += 1;
        }
    }
    for (name, count) in tally {
        println!("  {count:>3} x {name}");
    }
}
