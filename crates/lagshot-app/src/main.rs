//! lagshot: run a turret-versus-ship engagement headless.
//!
//! Usage:
//!   lagshot-app [--config engagement.json] [--seconds 60] [--seed 7]

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use log::info;

use lagshot_app::game_loop::spawn_game_loop;
use lagshot_app::hud;
use lagshot_app::state::{new_latest_snapshot, GameLoopCommand};
use lagshot_core::commands::PlayerCommand;
use lagshot_core::config::SimConfig;
use lagshot_core::enums::GamePhase;
use lagshot_sim::SimulationEngine;

struct Options {
    config: Option<PathBuf>,
    seconds: f64,
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(message) = run(options) {
        eprintln!("Error: {message}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "lagshot: delayed-information turret engagement\n\
         \n\
           --config <path>   JSON engagement config (optional, defaults otherwise)\n\
           --seconds <N>     Wall-clock run time before quitting (default: 60)\n\
           --seed <N>        Override the RNG seed\n"
    );
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config: None,
        seconds: 60.0,
        seed: None,
    };

    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--config", Some(v)) => options.config = Some(PathBuf::from(v)),
            ("--seconds", Some(v)) => {
                options.seconds = v.parse().map_err(|_| format!("Invalid --seconds: {v}"))?;
            }
            ("--seed", Some(v)) => {
                options.seed = Some(v.parse().map_err(|_| format!("Invalid --seed: {v}"))?);
            }
            ("help" | "--help" | "-h", _) => {
                print_usage();
                process::exit(0);
            }
            (other, _) => return Err(format!("Unknown or incomplete argument: {other}")),
        }
        i += 2;
    }
    Ok(options)
}

fn load_config(options: &Options) -> Result<SimConfig, String> {
    let mut config = match &options.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            SimConfig::from_json(&json).map_err(|e| e.to_string())?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn run(options: Options) -> Result<(), String> {
    let config = load_config(&options)?;
    let engine = SimulationEngine::new(config).map_err(|e| e.to_string())?;

    let latest = new_latest_snapshot();
    let (tx, handle) =
        spawn_game_loop(engine, latest.clone()).map_err(|e| format!("Failed to spawn game loop: {e}"))?;
    let send = |cmd: GameLoopCommand| tx.send(cmd).map_err(|_| "Game loop exited".to_string());

    send(GameLoopCommand::PlayerCommand(PlayerCommand::StartEngagement))?;

    let deadline = Instant::now() + Duration::from_secs_f64(options.seconds.max(0.0));
    while Instant::now() < deadline && !handle.is_finished() {
        std::thread::sleep(Duration::from_secs(1));
        let snapshot = latest.lock().ok().and_then(|lock| lock.clone());
        if let Some(snapshot) = snapshot {
            info!("{}", hud::status_line(&snapshot));
            if snapshot.phase == GamePhase::Ending {
                break;
            }
        }
    }

    // The loop may already have exited on an invariant failure.
    let _ = tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Quit));
    match handle.join() {
        Ok(result) => result.map_err(|e| e.to_string())?,
        Err(_) => return Err("Game loop thread panicked".into()),
    }

    if let Some(snapshot) = latest.lock().ok().and_then(|lock| lock.clone()) {
        info!("{}", hud::outcome_line(&snapshot));
    }
    Ok(())
}
