//! Conquista -- a single-player territorial conquest game.
//!
//! Reads territory setup and player commands from stdin and writes the map,
//! mission and battle narration to stdout. Diagnostics go to stderr.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use conquista::config::GameConfig;
use conquista::dice::RngSource;
use conquista::logging::init_logging;
use conquista::session::run_session;

#[derive(Parser, Debug)]
#[command(name = "conquista")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON game configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for dice and mission draws.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Army color controlled by the player.
    #[arg(long)]
    color: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(color) = args.color {
        config.player_color = color;
    }
    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    let source = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match run_session(&config, stdin.lock(), &mut out, source) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
