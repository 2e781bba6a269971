use mapgen_core::{ArchetypeTable, MapBuilderConfig, MapKind, generate_with_config};

use std::{fs::write as write_output, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::event;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Ascii,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Number of columns in the map
    #[arg(short, long, default_value_t = 64)]
    columns: u32,

    /// Number of rows in the map
    #[arg(short, long, default_value_t = 45)]
    rows: u32,

    /// Seed for the random stream, taken from the clock when missing
    #[arg(short, long)]
    seed: Option<u64>,

    #[clap(short, long, default_value_t, value_enum)]
    kind: MapKind,

    #[clap(short, long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Minimum width and height of a region
    #[arg(long)]
    area_min_size: Option<u32>,

    /// Minimum width and height of a room
    #[arg(long)]
    room_min_size: Option<u32>,

    /// Passes the connectivity repair may run before failing
    #[arg(long)]
    max_repair_iterations: Option<u32>,

    /// Write the map to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log generation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn builder_config(&self) -> MapBuilderConfig {
        let mut config = MapBuilderConfig::default();

        if let Some(area_min_size) = self.area_min_size {
            config.bsp_config.area_min_size = area_min_size;
        }
        if let Some(room_min_size) = self.room_min_size {
            config.room_min_size = room_min_size;
        }
        if let Some(max_repair_iterations) = self.max_repair_iterations {
            config.max_repair_iterations = max_repair_iterations;
        }

        config
    }
}

fn clock_seed() -> anyhow::Result<u64> {
    use std::time::SystemTime;

    let now = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)?;
    Ok(now.as_nanos() as u64)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let seed = match args.seed {
        Some(seed) => seed,
        None => clock_seed()?,
    };

    let layout = generate_with_config(
        seed,
        args.columns,
        args.rows,
        args.kind,
        &args.builder_config(),
    )
    .with_context(|| format!("Failed to generate map with seed {}", seed))?;

    let rendered = match args.format {
        OutputFormat::Ascii => {
            let archetypes = ArchetypeTable::builtin();
            let archetype = archetypes
                .lookup(layout.kind)
                .first()
                .map_or("none", |archetype| archetype.name);

            format!(
                "seed: {} kind: {} archetype: {} regions: {}\n{}",
                layout.seed,
                layout.kind,
                archetype,
                layout.regions.len(),
                layout.grid
            )
        }
        OutputFormat::Json => serde_json::to_string_pretty(&layout)?,
    };

    match args.output {
        Some(path) => {
            write_output(&path, rendered)
                .with_context(|| format!("Failed to write map to {}", path.display()))?;
            event!(
                tracing::Level::INFO,
                "Saved map to {}",
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
