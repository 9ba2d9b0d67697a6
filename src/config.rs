use crate::args::Args;
use std::path::PathBuf;

/// Statistics verbosity selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsMode {
    #[default]
    None,
    Short,
    Full,
}

/// Runtime configuration resolved from the CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub prefix: String,
    pub append: bool,
    pub stats: StatsMode,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // -f wins when both statistics flags are given
        let stats = if args.full_stats {
            StatsMode::Full
        } else if args.short_stats {
            StatsMode::Short
        } else {
            StatsMode::None
        };

        Self {
            inputs: args.files,
            output_dir: args.output,
            prefix: args.prefix,
            append: args.append,
            stats,
        }
    }
}
