use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nsight")]
#[command(version)]
#[command(about = "Spot composite network services in nmap output", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable ANSI colour output (also honoured via NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match the open ports of an nmap report against the signature catalog
    #[command(alias = "a")]
    Analyze {
        /// nmap normal output (-oN) file, or `-` for stdin
        report: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// JSON signature catalog to use instead of the built-in one
        #[arg(short, long)]
        signatures: Option<PathBuf>,
    },
    /// List the signatures in the active catalog
    #[command(alias = "s")]
    Signatures {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// JSON signature catalog to use instead of the built-in one
        #[arg(short, long)]
        signatures: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_defaults() {
        let cli = Cli::try_parse_from(["nsight", "analyze", "scan.txt"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_color);
        match cli.command {
            Commands::Analyze { report, format, signatures } => {
                assert_eq!(report, PathBuf::from("scan.txt"));
                assert_eq!(format, OutputFormat::Text);
                assert!(signatures.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "nsight", "a", "-", "--no-color", "-vv", "--format", "json", "-s", "sigs.json",
        ])
        .unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Analyze { report, format, signatures } => {
                assert_eq!(report, PathBuf::from("-"));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(signatures, Some(PathBuf::from("sigs.json")));
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_requires_report() {
        assert!(Cli::try_parse_from(["nsight", "analyze"]).is_err());
        assert!(Cli::try_parse_from(["nsight", "analyze", "x", "--format", "csv"]).is_err());
    }
}
