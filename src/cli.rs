use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// TOML config file (oversample_factor, default_top_k, ...)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SourceArgs {
    /// JSON file holding an array of records.
    /// When absent a sample collection is generated.
    #[clap(long, global = true)]
    pub records: Option<PathBuf>,

    /// Number of sample records to generate
    #[clap(long, global = true, default_value_t = record_search::sample::DEFAULT_SAMPLE_COUNT)]
    pub sample: u32,

    /// Seed of the sample generator
    #[clap(long, global = true, default_value_t = record_search::sample::DEFAULT_SAMPLE_SEED)]
    pub seed: u64,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank records by similarity to a free-text query
    Search {
        query: String,

        /// Number of results (defaults to the config's default_top_k)
        #[clap(short = 'k', long)]
        top_k: Option<usize>,
    },
    /// Ranked search narrowed by grade and subject
    Filter {
        /// Free-text query; empty keeps storage order
        #[clap(default_value = "")]
        query: String,

        /// Only grades A and B
        #[clap(long, conflicts_with = "failed")]
        passed: bool,

        /// Only grades C, D and F
        #[clap(long)]
        failed: bool,

        /// Only science subjects
        #[clap(long)]
        science: bool,

        /// Maximum results (defaults to the config's default_max_results)
        #[clap(short, long)]
        max: Option<usize>,
    },
    /// Records with a passing grade
    Passed {
        #[clap(short, long)]
        max: Option<usize>,
    },
    /// Records with a failing grade
    Failed {
        #[clap(short, long)]
        max: Option<usize>,
    },
    /// Records with a science subject
    Science {
        #[clap(short, long)]
        max: Option<usize>,
    },
    /// Every record in storage order
    All,
    /// Number of records
    Count,
}

impl Command {
    /// Grade filter selected by `--passed` / `--failed`
    pub fn passed_filter(passed: bool, failed: bool) -> Option<bool> {
        match (passed, failed) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_top_k() {
        let args = Args::try_parse_from(["record-search", "search", "delhi physics", "-k", "5"]).unwrap();
        match args.command {
            Command::Search { query, top_k } => {
                assert_eq!(query, "delhi physics");
                assert_eq!(top_k, Some(5));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(args.source.sample, 100);
        assert_eq!(args.source.seed, 42);
    }

    #[test]
    fn filter_query_defaults_to_blank() {
        let args = Args::try_parse_from(["record-search", "filter", "--passed", "--science"]).unwrap();
        match args.command {
            Command::Filter { query, passed, failed, science, max } => {
                assert!(query.is_empty());
                assert_eq!(Command::passed_filter(passed, failed), Some(true));
                assert!(science);
                assert_eq!(max, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn passed_and_failed_conflict() {
        assert!(Args::try_parse_from(["record-search", "filter", "--passed", "--failed"]).is_err());
    }

    #[test]
    fn global_source_flags_after_subcommand() {
        let args = Args::try_parse_from(["record-search", "count", "--sample", "7", "--seed", "1"]).unwrap();
        assert_eq!(args.source.sample, 7);
        assert_eq!(args.source.seed, 1);
    }
}
