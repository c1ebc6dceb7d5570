//! Runtime configuration: environment variables, overridden by command-line flags.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::store::{sanitize_name, DEFAULT_NAME};

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_SCORES_PATH: &str = "BLOCKFALL_SCORES_PATH";
pub const ENV_PLAYER: &str = "BLOCKFALL_PLAYER";
pub const ENV_MUTED: &str = "BLOCKFALL_MUTED";

const SCORES_FILE: &str = "blockfall_scores.json";

pub const USAGE: &str = "\
usage: blockfall [--seed N] [--scores PATH] [--player NAME] [--mute]
       blockfall scores [--scores PATH] [--reset] [--reset-stats]

  scores          print the high-score table and lifetime stats, then exit
  --reset         with scores: empty the high-score table first
  --reset-stats   with scores: zero the lifetime stats first
  --seed N        piece generator seed (default: from the clock)
  --scores PATH   high-score file (default: $HOME/.blockfall_scores.json)
  --player NAME   name stored with high scores
  --mute          start with the bell muted
  -h, --help      show this help

environment: BLOCKFALL_SEED, BLOCKFALL_SCORES_PATH, BLOCKFALL_PLAYER, BLOCKFALL_MUTED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Scores,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    /// `None` means derive one from the clock
    pub seed: Option<u32>,
    pub scores_path: PathBuf,
    pub player: String,
    pub muted: bool,
    pub reset_scores: bool,
    pub reset_stats: bool,
}

impl Config {
    /// Read the process environment and arguments
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(|key| std::env::var(key).ok(), &args)
    }

    /// Build from an environment lookup and arguments (without the program name)
    pub fn parse(env: impl Fn(&str) -> Option<String>, args: &[String]) -> Result<Self> {
        let mut config = Self::from_vars(&env)?;

        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "scores" if i == 0 => config.command = Command::Scores,
                "-h" | "--help" => config.command = Command::Help,
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    config.seed = Some(parse_seed(v)?);
                }
                "--scores" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --scores"))?;
                    config.scores_path = PathBuf::from(v);
                }
                "--player" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --player"))?;
                    config.player = sanitize_name(v);
                }
                "--mute" => config.muted = true,
                "--reset" => config.reset_scores = true,
                "--reset-stats" => config.reset_stats = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }

        if config.command == Command::Play && (config.reset_scores || config.reset_stats) {
            return Err(anyhow!("--reset and --reset-stats only apply to `blockfall scores`"));
        }

        Ok(config)
    }

    fn from_vars(env: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            env(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var(ENV_SEED).map(|v| parse_seed(&v)).transpose()?;

        let scores_path = var(ENV_SCORES_PATH)
            .map(PathBuf::from)
            .or_else(|| var("HOME").map(|home| PathBuf::from(home).join(format!(".{}", SCORES_FILE))))
            .unwrap_or_else(|| PathBuf::from(SCORES_FILE));

        let player = var(ENV_PLAYER)
            .or_else(|| var("USER"))
            .map(|name| sanitize_name(&name))
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let muted = match var(ENV_MUTED) {
            Some(v) => parse_flag(ENV_MUTED, &v)?,
            None => false,
        };

        Ok(Self {
            command: Command::Play,
            seed,
            scores_path,
            player,
            muted,
            reset_scores: false,
            reset_stats: false,
        })
    }
}

fn parse_seed(v: &str) -> Result<u32> {
    v.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("invalid seed: {}", v))
}

fn parse_flag(key: &str, v: &str) -> Result<bool> {
    match v.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("invalid value for {}: {}", key, v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::parse(env_of(&[]), &[]).unwrap();
        assert_eq!(config.command, Command::Play);
        assert_eq!(config.seed, None);
        assert_eq!(config.scores_path, PathBuf::from("blockfall_scores.json"));
        assert_eq!(config.player, "Player");
        assert!(!config.muted);
        assert!(!config.reset_scores);
        assert!(!config.reset_stats);
    }

    #[test]
    fn home_and_user_fill_defaults() {
        let config = Config::parse(env_of(&[("HOME", "/home/ada"), ("USER", "ada")]), &[]).unwrap();
        assert_eq!(
            config.scores_path,
            PathBuf::from("/home/ada/.blockfall_scores.json")
        );
        assert_eq!(config.player, "ada");
    }

    #[test]
    fn environment_values() {
        let env = env_of(&[
            (ENV_SEED, "42"),
            (ENV_SCORES_PATH, "/tmp/s.json"),
            (ENV_PLAYER, "  grace  "),
            (ENV_MUTED, "true"),
            ("USER", "ignored"),
        ]);
        let config = Config::parse(env, &[]).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.scores_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.player, "grace");
        assert!(config.muted);
    }

    #[test]
    fn flags_override_environment() {
        let env = env_of(&[(ENV_SEED, "42"), (ENV_PLAYER, "grace")]);
        let config = Config::parse(
            env,
            &args(&["--seed", "7", "--player", "linus", "--mute", "--scores", "x.json"]),
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.player, "linus");
        assert!(config.muted);
        assert_eq!(config.scores_path, PathBuf::from("x.json"));
    }

    #[test]
    fn subcommands() {
        let config = Config::parse(env_of(&[]), &args(&["scores"])).unwrap();
        assert_eq!(config.command, Command::Scores);
        let config = Config::parse(env_of(&[]), &args(&["--help"])).unwrap();
        assert_eq!(config.command, Command::Help);
        assert!(Config::parse(env_of(&[]), &args(&["--mute", "scores"])).is_err());
    }

    #[test]
    fn reset_flags_belong_to_scores() {
        let config = Config::parse(env_of(&[]), &args(&["scores", "--reset"])).unwrap();
        assert_eq!(config.command, Command::Scores);
        assert!(config.reset_scores);
        assert!(!config.reset_stats);

        let config =
            Config::parse(env_of(&[]), &args(&["scores", "--reset-stats", "--reset"])).unwrap();
        assert!(config.reset_scores);
        assert!(config.reset_stats);

        let err = Config::parse(env_of(&[]), &args(&["--reset"])).unwrap_err();
        assert!(err.to_string().contains("scores"));
        assert!(Config::parse(env_of(&[]), &args(&["--reset-stats", "--seed", "3"])).is_err());
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(Config::parse(env_of(&[(ENV_SEED, "abc")]), &[]).is_err());
        assert!(Config::parse(env_of(&[(ENV_MUTED, "maybe")]), &[]).is_err());
        assert!(Config::parse(env_of(&[]), &args(&["--seed"])).is_err());
        assert!(Config::parse(env_of(&[]), &args(&["--seed", "-1"])).is_err());
        let err = Config::parse(env_of(&[]), &args(&["--fast"])).unwrap_err();
        assert!(err.to_string().contains("--fast"));
    }
}
