use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Look up the current weather for a city")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "SKYCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up one city and print the result
    Lookup {
        /// City name, e.g. "New York"
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Print the result as JSON (same shape as the web API)
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities until :quit or end of input (default)
    Interactive,

    /// Start the web front end
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_joins_words_and_takes_json() {
        let cli = Cli::try_parse_from(["skycast", "lookup", "New", "York", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Lookup { city, json }) => {
                assert_eq!(city, vec!["New", "York"]);
                assert!(json);
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_json_is_rejected_outside_lookup() {
        assert!(Cli::try_parse_from(["skycast", "serve", "--json"]).is_err());
        assert!(Cli::try_parse_from(["skycast", "interactive", "--json"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["skycast", "serve", "--no-color", "--port", "9000"]).unwrap();
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::Serve { port: Some(9000), .. })));
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["skycast"]).unwrap();
        assert!(cli.command.is_none());
    }
}
