use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pcrhelper_core::config::{RANDOM_DEFAULT_LEN, RANDOM_MAX_LEN, RANDOM_MIN_LEN};

#[derive(Parser)]
#[command(name = "pcrhelper")]
#[command(version)]
#[command(about = "DNA base composition, transcription and translation", long_about = None)]
pub struct Cli {
    /// History file (default: $PCRHELPER_HISTORY, then ~/.pcrhelper_history.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub history_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a DNA sequence
    Analyze(AnalyzeArgs),
    /// Generate a random DNA sequence
    Random(RandomArgs),
    /// Show or clear recently analyzed inputs
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// DNA sequence; `-` reads it from stdin
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not record this input in the history
    #[arg(long)]
    pub no_history: bool,

    /// Reject sequences longer than this many bases
    #[arg(long, value_name = "N")]
    pub max_len: Option<usize>,
}

#[derive(Parser)]
pub struct RandomArgs {
    /// Sequence length in bases
    #[arg(short, long, default_value_t = RANDOM_DEFAULT_LEN as u64,
          value_parser = clap::value_parser!(u64).range(RANDOM_MIN_LEN as u64..=RANDOM_MAX_LEN as u64))]
    pub length: u64,

    /// PRNG seed (default: derived from the clock)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Analyze the generated sequence instead of only printing it
    #[arg(short, long)]
    pub analyze: bool,

    /// With --analyze, emit the result as JSON
    #[arg(long, requires = "analyze")]
    pub json: bool,

    /// With --analyze, do not record the sequence in the history
    #[arg(long, requires = "analyze")]
    pub no_history: bool,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryAction {
    /// List entries, most recent first (default)
    List,
    /// Remove all entries
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyze() {
        let cli = Cli::try_parse_from(["pcrhelper", "analyze", "ATGTTTTAA", "--json"]).unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.sequence, "ATGTTTTAA");
                assert!(args.json);
                assert!(!args.no_history);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn random_length_is_range_checked() {
        assert!(Cli::try_parse_from(["pcrhelper", "random", "--length", "0"]).is_err());
        assert!(Cli::try_parse_from(["pcrhelper", "random", "--length", "10001"]).is_err());
        let cli = Cli::try_parse_from(["pcrhelper", "random", "-l", "10000"]).unwrap();
        match cli.command {
            Commands::Random(args) => assert_eq!(args.length, 10_000),
            _ => panic!("expected random"),
        }
    }

    #[test]
    fn history_defaults_to_list() {
        let cli = Cli::try_parse_from(["pcrhelper", "history"]).unwrap();
        assert!(matches!(cli.command, Commands::History { action: None }));
        let cli = Cli::try_parse_from(["pcrhelper", "history", "clear"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::History {
                action: Some(HistoryAction::Clear)
            }
        ));
    }
}
