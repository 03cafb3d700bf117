//! Nova Outpost - Entry Point
//!
//! Headless driver for the colony engine. Runs the tick loop on demand from
//! a small command prompt, so the simulation can be exercised and inspected
//! without a rendering collaborator.

use nova_outpost::catalog::Catalog;
use nova_outpost::colony::{snapshot, ColonyState};
use nova_outpost::core::config::ColonyConfig;
use nova_outpost::core::error::Result;
use nova_outpost::core::types::GridPos;
use nova_outpost::simulation::tick::tick;

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nova-outpost", about = "Colony economy simulation engine")]
struct Args {
    /// Seed for resource-node worldgen
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Catalog definition file (TOML); built-in catalog when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Snapshot to restore on startup
    #[arg(long)]
    load: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nova_outpost=info".into()),
        )
        .init();

    let args = Args::parse();
    tracing::info!("Nova Outpost starting...");

    let catalog = match &args.catalog {
        Some(path) => Catalog::load_from_file(path)?,
        None => Catalog::with_defaults(),
    };
    let mut colony = ColonyState::new(ColonyConfig::default(), catalog, args.seed)?;

    if let Some(path) = &args.load {
        let raw = fs::read_to_string(path)?;
        let snap = snapshot::from_json(&raw)?;
        snapshot::import_state(&mut colony, &snap)?;
    }

    println!("\n=== NOVA OUTPOST ===");
    println!("Colony economy simulation engine");
    println!();
    println!("Commands:");
    println!("  tick / t            - Advance simulation by one tick");
    println!("  run <n>             - Run n simulation ticks");
    println!("  select <TYPE|none>  - Arm a building type for construction");
    println!("  place <x> <y>       - Place the armed building type");
    println!("  place <TYPE> <x> <y> - Place a structure");
    println!("  remove <x> <y>      - Demolish the structure on a tile");
    println!("  buildings           - List available building types");
    println!("  research <id>       - Research a technology");
    println!("  speed <n>           - Set the time multiplier (0 pauses)");
    println!("  status / s          - Show colony status");
    println!("  save <file>         - Export a snapshot");
    println!("  load <file>         - Import a snapshot");
    println!("  quit / q            - Exit");
    println!();

    loop {
        display_status(&colony);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        if let Err(e) = dispatch(&mut colony, input) {
            println!("Error: {e}");
        }
    }

    tracing::info!("Nova Outpost shutting down");
    Ok(())
}

fn dispatch(colony: &mut ColonyState, input: &str) -> Result<()> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        ["tick"] | ["t"] => {
            tick(colony);
        }
        ["run", n] => {
            let count: u64 = n.parse().unwrap_or(1);
            for _ in 0..count {
                tick(colony);
            }
            println!("Ran {count} ticks");
        }
        ["select", "none"] => {
            colony.select_building_type(None)?;
            println!("Construction mode left");
        }
        ["select", key] => {
            colony.select_building_type(Some(key))?;
            println!("Armed {key} for construction");
        }
        ["place", x, y] => {
            let Some(key) = colony.selected_building_type().map(str::to_string) else {
                println!("No building type armed; use select <TYPE>");
                return Ok(());
            };
            let pos = parse_pos(x, y)?;
            let id = colony.place_structure(&key, pos)?;
            println!("Placed {key} at {pos} ({id})");
        }
        ["place", key, x, y] => {
            let pos = parse_pos(x, y)?;
            let id = colony.place_structure(key, pos)?;
            println!("Placed {key} at {pos} ({id})");
        }
        ["remove", x, y] => {
            let pos = parse_pos(x, y)?;
            colony.remove_structure(pos)?;
            println!("Removed structure at {pos}");
        }
        ["buildings"] => {
            let available = colony.available_buildings();
            for def in colony.catalog.buildings() {
                if available.contains(&def.key.as_str()) {
                    println!("  {:<20} cost {:>6}  {}", def.key, def.cost, def.name);
                }
            }
        }
        ["research", id] => {
            colony.research(id)?;
            println!("Researched {id}");
        }
        ["speed", n] => {
            let multiplier: u64 = n.parse().unwrap_or(1);
            colony.set_multiplier(multiplier);
            println!("Time multiplier set to {multiplier}");
        }
        ["status"] | ["s"] => {
            display_resources(colony);
        }
        ["save", path] => {
            let snap = snapshot::export_state(colony);
            fs::write(path, snapshot::to_json(&snap)?)?;
            println!("Saved to {path}");
        }
        ["load", path] => {
            let raw = fs::read_to_string(path)?;
            let snap = snapshot::from_json(&raw)?;
            snapshot::import_state(colony, &snap)?;
            println!("Loaded {path}");
        }
        _ => println!("Unknown command: {input}"),
    }
    Ok(())
}

fn parse_pos(x: &str, y: &str) -> Result<GridPos> {
    let x: u32 = x
        .parse()
        .map_err(|_| nova_outpost::ColonyError::InvalidConfig(format!("bad x coordinate '{x}'")))?;
    let y: u32 = y
        .parse()
        .map_err(|_| nova_outpost::ColonyError::InvalidConfig(format!("bad y coordinate '{y}'")))?;
    Ok(GridPos::new(x, y))
}

fn display_status(colony: &ColonyState) {
    println!(
        "[tick {} | x{}] credits {} | pop {}/{} | power {}/{} | value {} | rank {}",
        colony.game_time,
        colony.multiplier,
        colony.credits,
        colony.population,
        colony.housing_capacity,
        colony.power_demand,
        colony.power_capacity,
        colony.city_value,
        colony.current_rank(),
    );
    for alert in colony
        .alerts
        .active(colony.game_time, colony.config.alert_display_ticks)
    {
        println!("  ! {}", alert.message);
    }
}

fn display_resources(colony: &ColonyState) {
    println!("Resources:");
    let mut entries: Vec<_> = colony.stockpile.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (resource, amount) in entries {
        println!("  {resource:<20} {amount}");
    }
    println!("Technologies: {:?}", colony.researched);
    println!("Structures: {}", colony.structures.len());
}
