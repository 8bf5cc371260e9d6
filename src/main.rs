//! Lineal CLI - run an evolution toward the reference linear target.

use std::fs;
use std::path::PathBuf;

use lineal::engine::{EvolutionEngine, LinearTarget};
use lineal::schema::EngineConfig;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("--example") {
        print_example_config();
        return;
    }

    // Optional config file; defaults otherwise.
    let config: EngineConfig = match args.get(1) {
        Some(path) => {
            let config_str = fs::read_to_string(PathBuf::from(path)).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => EngineConfig::default(),
    };

    let mut engine = EvolutionEngine::new(config, LinearTarget::default()).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    let outcome = engine.run_with_callback(|progress| {
        if progress.iteration == 0 {
            match serde_json::to_string_pretty(progress.ranking) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializing ranking: {}", e),
            }
            println!("Running...");
        }
        for event in progress.mutations {
            println!(
                "mutate! original: {}. {} --> {}",
                event.original, event.from, event.to
            );
        }
        println!(
            "iteration: {} best: {} score: {:.6}",
            progress.iteration, progress.best.candidate, progress.best.score
        );
    });

    println!(
        "winner: {} ({:?} at iteration {}, score {:.6})",
        outcome.winner.candidate, outcome.stop_reason, outcome.iterations, outcome.winner.score
    );

    let stats = engine.lineage_stats(&outcome.winner.candidate);
    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing stats: {}", e),
    }
}

fn print_example_config() {
    match serde_json::to_string_pretty(&EngineConfig::default()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example config: {}", e),
    }
}
