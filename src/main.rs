//! Replays a recorded landmark stream through the lunge rep counter.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use lunge_rep_counter::config::{Config, EXAMPLE_CONFIG};
use lunge_rep_counter::recording::{Recording, ReplaySummary};
use lunge_rep_counter::{EventLog, FeedbackEvent, LogSink, LungeRepCounter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recorded pose detector output (YAML)
    #[arg(required_unless_present = "print_config")]
    recording: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Moving average window, overrides the configuration
    #[arg(short, long)]
    window: Option<usize>,

    /// Keep separate histories for the standing-detection angles
    #[arg(long)]
    split_history: bool,

    /// Print every feedback event instead of logging it as it happens
    #[arg(short, long)]
    events: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            match Config::from_file(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("Failed to load config file: {}. Using defaults.", e);
                    Config::default()
                }
            }
        }
        None => Config::default(),
    };
    if let Some(window) = args.window {
        config.smoothing.window_size = window;
    }
    if args.split_history {
        config.smoothing.split_standing_history = true;
    }

    let path = args.recording.context("no recording given")?;
    info!("Replaying {}", path);
    let recording = Recording::from_file(&path).with_context(|| format!("reading {path}"))?;

    if args.events {
        let mut counter = LungeRepCounter::with_config(&config, EventLog::new())?;
        let summary = recording.replay(&mut counter);

        for event in counter.sink().events() {
            match event {
                FeedbackEvent::RepCompleted => println!("rep"),
                FeedbackEvent::Progress(value) => println!("progress {value:.2}"),
                FeedbackEvent::Message(text) => println!("message {text}"),
            }
        }
        report(&summary, counter.rep_count());
    } else {
        let mut counter = LungeRepCounter::with_config(&config, LogSink::new())?;
        let summary = recording.replay(&mut counter);
        report(&summary, counter.rep_count());
    }

    Ok(())
}

fn report(summary: &ReplaySummary, reps: u32) {
    println!(
        "frames: {} processed, {} without pose, {} rejected",
        summary.processed, summary.no_pose, summary.rejected
    );
    println!("reps: {reps}");
}
