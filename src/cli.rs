//! Command line arguments for the `enumerate` binary
use clap::{Args, Parser, Subcommand, ValueEnum};
use exhaustive_enum::{
    EnumerationError, PermutationStrategy, SubsetStrategy, parser::SequenceParseError,
};
use thiserror::Error;

///Errors that end a run of the binary.
#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error(transparent)]
    Parse(#[from] SequenceParseError),
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
    #[error("unable to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    ///Whether the reader of our output went away, e.g. `enumerate permute ... | head`.
    pub(crate) fn is_broken_pipe(&self) -> bool {
        matches!(self, CliError::Io(err) if err.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Enumerate permutations of a sequence or the subsets that add up to a target
#[derive(Parser, Debug)]
#[command(version)]
pub(crate) struct CliApp {
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print every ordering of a sequence of labels, e.g. "a, b, c"
    Permute {
        /// Comma-separated items, optionally in brackets
        sequence: String,
        /// Engine used to walk the permutations
        #[arg(long, value_enum, default_value_t)]
        strategy: PermuteWith,
        /// Prefix each ordering with its number, like "#0001: "
        #[arg(long)]
        numbered: bool,
        /// Print a JSON array instead of one line per ordering
        #[arg(long)]
        json: bool,
    },
    /// Print every distinct subset of integers summing to a target
    Subsets {
        /// Comma-separated integers, optionally in brackets
        sequence: String,
        /// The sum to look for
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,
        /// How to search
        #[arg(long, value_enum, default_value_t)]
        strategy: SearchWith,
        /// Keep summing past the target; required for negative values
        #[arg(long)]
        no_pruning: bool,
        /// Print a JSON array of {indices, values} objects
        #[arg(long)]
        json: bool,
    },
}

/// Permutation engines selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub(crate) enum PermuteWith {
    /// Filter a mixed-radix counter
    #[default]
    Counter,
    /// Expand prefixes on a work-list
    Tree,
}

impl From<PermuteWith> for PermutationStrategy {
    fn from(val: PermuteWith) -> Self {
        match val {
            PermuteWith::Counter => PermutationStrategy::Counter,
            PermuteWith::Tree => PermutationStrategy::Tree,
        }
    }
}

/// Subset search strategies selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub(crate) enum SearchWith {
    /// Walk a binary mask over the positions
    #[default]
    Mask,
    /// Scan prefix sums of every permutation from the counter engine
    PrefixCounter,
    /// Scan prefix sums of every permutation from the tree engine
    PrefixTree,
}

impl From<SearchWith> for SubsetStrategy {
    fn from(val: SearchWith) -> Self {
        match val {
            SearchWith::Mask => SubsetStrategy::Mask,
            SearchWith::PrefixCounter => {
                SubsetStrategy::PermutationPrefix(PermutationStrategy::Counter)
            }
            SearchWith::PrefixTree => SubsetStrategy::PermutationPrefix(PermutationStrategy::Tree),
        }
    }
}

/// Cli Arguments related to logging
#[derive(Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser = clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Sets the logging verbosity, in order of precedence, from `--log`, `-q`, the count of
    /// `-v`, the `ENUMERATE_LOG` environment variable, and finally `Warn`.
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env("ENUMERATE_LOG");
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}
