//! Terminal falling-block game (default binary).
//!
//! Configuration problems are reported before the terminal switches to raw mode; storage
//! problems never stop a game.

use std::process::ExitCode;

use blockfall::app::{self, unix_ms, App};
use blockfall::config::{Command, Config, USAGE};
use blockfall::report::score_report;
use blockfall::store::HighScores;

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[Config] {:#}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match config.command {
        Command::Help => {
            println!("{}", USAGE);
            ExitCode::SUCCESS
        }
        Command::Scores => scores(&config),
        Command::Play => play(&config),
    }
}

fn play(config: &Config) -> ExitCode {
    let scores = load_scores(config);
    let mut app = App::new(config, scores);

    let result = app::run(&mut app);

    for warning in app.take_warnings() {
        eprintln!("{}", warning);
    }
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[Term] {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn scores(config: &Config) -> ExitCode {
    let mut scores = match HighScores::load(&config.scores_path) {
        Ok(scores) => scores,
        // Never reset over a file we could not read.
        Err(e) if config.reset_scores || config.reset_stats => {
            eprintln!("[Store] {:#}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("[Store] {:#}", e);
            HighScores::in_memory()
        }
    };

    if config.reset_scores || config.reset_stats {
        if config.reset_scores {
            scores.reset_scores();
        }
        if config.reset_stats {
            scores.reset_stats();
        }
        if let Err(e) = scores.save() {
            eprintln!("[Store] {:#}", e);
            return ExitCode::FAILURE;
        }
    }

    print!("{}", score_report(&scores, unix_ms()));
    ExitCode::SUCCESS
}

/// A broken score file gives an in-memory table so it is never overwritten
fn load_scores(config: &Config) -> HighScores {
    match HighScores::load(&config.scores_path) {
        Ok(scores) => scores,
        Err(e) => {
            eprintln!("[Store] {:#}; scores will not be saved", e);
            HighScores::in_memory()
        }
    }
}
