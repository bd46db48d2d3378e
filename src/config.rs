//! Run configuration and command-line arguments.

use std::num::NonZeroUsize;

use clap::Parser;
use tracing::warn;

/// Matrix dimension used when none (or an invalid one) is given.
pub const DEFAULT_SIZE: usize = 20;
/// Worker threads per run unless overridden.
pub const DEFAULT_WORKERS: usize = 10;

/// Sum, difference and product of two random square matrices, computed
/// by a fixed pool of worker threads.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Matrix dimension N. Invalid values fall back to the default with a warning.
    #[arg(allow_negative_numbers = true)]
    pub size: Option<String>,

    /// Number of worker threads.
    #[arg(short, long, default_value_t = default_workers())]
    pub workers: NonZeroUsize,

    /// Seed for the input generator. Omit for a fresh random run.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: NonZeroUsize,
    pub workers: NonZeroUsize,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: default_size(),
            workers: default_workers(),
            seed: None,
        }
    }
}

impl Config {
    /// Resolves parsed arguments, substituting [`DEFAULT_SIZE`] for a size
    /// that isn't a positive integer.
    pub fn from_args(args: Args) -> Self {
        Self {
            size: args.size.as_deref().map_or_else(default_size, parse_size),
            workers: args.workers,
            seed: args.seed,
        }
    }
}

fn parse_size(raw: &str) -> NonZeroUsize {
    match raw.trim().parse::<usize>().ok().and_then(NonZeroUsize::new) {
        Some(size) => size,
        None => {
            warn!("invalid matrix size {:?}, falling back to default size {}", raw, DEFAULT_SIZE);
            default_size()
        }
    }
}

fn default_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_SIZE).unwrap_or(NonZeroUsize::MIN)
}

fn default_workers() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_WORKERS).unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(argv: &[&str]) -> Config {
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        assert_eq!(config_for(&["matops"]), Config::default());
        assert_eq!(Config::default().size.get(), 20);
        assert_eq!(Config::default().workers.get(), 10);
    }

    #[test]
    fn test_valid_size() {
        assert_eq!(config_for(&["matops", "7"]).size.get(), 7);
    }

    #[test]
    fn test_invalid_sizes_fall_back() {
        for raw in ["abc", "0", "-5", "3.5", ""] {
            assert_eq!(config_for(&["matops", raw]).size.get(), DEFAULT_SIZE, "{:?}", raw);
        }
    }

    #[test]
    fn test_workers_and_seed() {
        let config = config_for(&["matops", "4", "--workers", "3", "--seed", "99"]);
        assert_eq!(config.workers.get(), 3);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_two_positionals_rejected() {
        assert!(Args::try_parse_from(["matops", "4", "5"]).is_err());
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(Args::try_parse_from(["matops", "--workers", "0"]).is_err());
    }
}
