//! playloop - Keyboard-Driven Terminal Render Loop
//!
//! Moves a green circle around a terminal canvas with the arrow keys.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::File;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("playloop")
        .version(playloop::VERSION)
        .about("Move an actor around a terminal canvas with the arrow keys")
        .long_about(
            "playloop runs a small real-time render loop: the arrow keys set the actor's \
             velocity, releasing a key stops that axis, and q, Esc or Ctrl+C quits.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML configuration file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fps")
                .long("fps")
                .help("Frames per second (0 disables pacing)")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("frames")
                .long("frames")
                .help("Stop after this many frames")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file instead of stderr")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-status")
                .long("no-status")
                .help("Hide the status line")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(matches: &ArgMatches) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = matches.get_one::<PathBuf>("log-file") {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<playloop::Config> {
    let explicit = matches.get_one::<PathBuf>("config");
    let mut config = playloop::Config::discover(explicit.map(PathBuf::as_path))
        .context("Failed to load configuration")?;

    if let Some(&fps) = matches.get_one::<u32>("fps") {
        config.frame_rate = fps;
    }
    if matches.get_flag("no-status") {
        config.show_status = false;
    }
    Ok(config)
}

fn frame_limit(matches: &ArgMatches) -> playloop::Result<Option<u64>> {
    match matches.get_one::<u64>("frames").copied() {
        Some(0) => Err(playloop::PlayloopError::invalid_argument(
            "--frames must be at least 1",
        )),
        limit => Ok(limit),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    init_logging(&matches)?;
    let config = load_config(&matches)?;
    let frame_limit = frame_limit(&matches)?;

    let report = playloop::app::runtime::run_interactive(&config, frame_limit).await?;
    log::info!(
        "final position ({}, {}) after {} frames",
        report.actor.x,
        report.actor.y,
        report.frames
    );

    Ok(())
}
