use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smhi-metobs")]
#[command(about = "Extract data from SMHI's meteorological observations API")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "List SMHI API parameters")]
    pub parameters: bool,

    #[arg(long, help = "List highest/lowest temperatures")]
    pub temperatures: bool,

    #[arg(
        long,
        value_name = "ID",
        help = "Parameter to compute temperature extremes for [default: 2]"
    )]
    pub parameter: Option<u32>,

    #[arg(
        long,
        value_name = "N",
        help = "Concurrent station requests, 0 = one per CPU [default: 1]"
    )]
    pub workers: Option<usize>,

    #[arg(long, value_name = "FILE", help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide the progress indicator")]
    pub quiet: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn has_work(&self) -> bool {
        self.parameters || self.temperatures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["smhi-metobs"]).unwrap();
        assert!(!cli.has_work());
        assert!(cli.parameter.is_none());
        assert!(cli.workers.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "smhi-metobs",
            "--parameters",
            "--temperatures",
            "--workers",
            "4",
            "--parameter",
            "1",
            "-v",
        ])
        .unwrap();

        assert!(cli.parameters);
        assert!(cli.temperatures);
        assert_eq!(cli.workers, Some(4));
        assert_eq!(cli.parameter, Some(1));
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["smhi-metobs", "--humidity"]).is_err());
    }
}
