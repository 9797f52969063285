use std::path::PathBuf;

use clap::Parser;

/// Orders distress signal packets and reports both puzzle answers.
#[derive(Parser, Debug, Clone)]
#[command(name = "day13", version)]
pub struct Cli {
    /// Puzzle input file; standard input is read when omitted
    pub input: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["day13"]).unwrap();

        assert_eq!(cli.input, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_input_path_and_verbose() {
        let cli = Cli::try_parse_from(["day13", "-v", "input.txt"]).unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("input.txt")));
        assert!(cli.verbose);
    }
}
