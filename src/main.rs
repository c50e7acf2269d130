//! Frame replay driver: feeds recorded detector output through the engine.

use anyhow::Result;
use avatar_pose::config::Config;
use avatar_pose::keypoint::Frame;
use avatar_pose::rig::place_figure;
use avatar_pose::tracker::HeadTracker;
use clap::Parser;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSONL file of detector frames (stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Emit figure placements instead of raw pose estimates
    #[arg(long)]
    rig: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    config.validate()?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            info!("Replaying frames from: {}", path);
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut tracker = HeadTracker::new(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut frames = 0usize;
    let mut accepted = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        frames += 1;

        let frame = Frame::from_json(&line)?;
        match tracker.process(&frame) {
            Some(estimate) => {
                accepted += 1;
                if args.rig {
                    let placement = place_figure(&estimate, &config.rig);
                    serde_json::to_writer(&mut out, &placement)?;
                } else {
                    serde_json::to_writer(&mut out, &estimate)?;
                }
                out.write_all(b"\n")?;
            }
            None => debug!("frame {} rejected by pose gate", frames),
        }
    }

    info!("Processed {} frames, {} accepted", frames, accepted);

    Ok(())
}
