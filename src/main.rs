//! Starfield CLI
//!
//! Query the generator from the command line. All output is JSON or hex,
//! so results can be diffed across machines and releases.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use starfield::{
    core::hash::parse_fingerprint,
    galaxy::region::scan_region,
    verify::{check_reference_vectors, verify_region},
    Coord, Region, RegionStats, ScanConfig, VERSION, generate,
};

/// Deterministic star-system generator.
#[derive(Parser, Debug)]
#[command(name = "starfield", version, about = "Deterministic procedural star systems on an infinite grid")]
struct Cli {
    /// JSON config file (otherwise read from STARFIELD_* environment variables).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the system at one cell.
    System {
        #[arg(allow_negative_numbers = true)]
        x: i64,
        #[arg(allow_negative_numbers = true)]
        y: i64,
        /// Include planets and moons.
        #[arg(long)]
        full: bool,
    },
    /// Print every star in a region.
    Scan(RegionArgs),
    /// Print aggregate counts for a region.
    Stats(RegionArgs),
    /// Print the fingerprint of a region.
    Digest(RegionArgs),
    /// Check reference vectors and replay a region.
    Verify {
        /// Region to replay as X Y W H.
        #[arg(long, num_args = 4, value_names = ["X", "Y", "W", "H"], allow_negative_numbers = true)]
        region: Option<Vec<i64>>,
        /// Expected region digest (hex).
        #[arg(long)]
        expect: Option<String>,
        /// Replay with planets and moons.
        #[arg(long)]
        full: bool,
    },
}

#[derive(Args, Debug)]
struct RegionArgs {
    #[arg(allow_negative_numbers = true)]
    x: i64,
    #[arg(allow_negative_numbers = true)]
    y: i64,
    width: u32,
    height: u32,
    /// Include planets and moons.
    #[arg(long)]
    full: bool,
}

impl RegionArgs {
    fn region(&self, config: &ScanConfig) -> anyhow::Result<Region> {
        let region = Region::new(Coord::new(self.x, self.y), self.width, self.height);
        region.validate(config.max_cells)?;
        Ok(region)
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ScanConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ScanConfig::from_env(),
    };

    info!("Starfield v{}", VERSION);

    match cli.command {
        Command::System { x, y, full } => {
            let system = generate(Coord::new(x, y), config.detail(full));
            println!("{}", serde_json::to_string_pretty(&system)?);
        }
        Command::Scan(args) => {
            let region = args.region(&config)?;
            let found = scan_region(&region, config.detail(args.full));
            info!("Found {} stars in {} cells", found.len(), region.cell_count());
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
        Command::Stats(args) => {
            let region = args.region(&config)?;
            let stats = RegionStats::collect(&region, config.detail(args.full));
            info!("Density: {:.4}", stats.density());
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Command::Digest(args) => {
            let region = args.region(&config)?;
            println!("{}", hex::encode(region.digest(config.detail(args.full))));
        }
        Command::Verify { region, expect, full } => {
            check_reference_vectors()?;
            info!("Reference vectors OK");

            let expected = match expect.as_deref() {
                Some(text) => match parse_fingerprint(text) {
                    Some(digest) => Some(digest),
                    None => bail!("invalid digest: {}", text),
                },
                None => None,
            };

            let region = match region.as_deref() {
                Some(&[x, y, w, h]) => {
                    let width = u32::try_from(w).context("region width")?;
                    let height = u32::try_from(h).context("region height")?;
                    Region::new(Coord::new(x, y), width, height)
                }
                Some(_) => bail!("--region takes exactly four values"),
                None => Region::new(Coord::ORIGIN, 64, 64),
            };
            region.validate(config.max_cells)?;

            let result = verify_region(&region, config.detail(full), expected);
            println!("{}", hex::encode(result.computed));
            if let Some(error) = result.error {
                bail!(error);
            }
            info!("DETERMINISM VERIFIED: Region {} replays identically", region.origin);
        }
    }

    Ok(())
}
