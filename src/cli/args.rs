use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "bujo")]
#[command(about = "Parse bullet journal lines into structured events and tasks")]
#[command(long_about = "bujo - A bullet journal line parser

Each line starts with a bullet, an optional [annotation], free text and
optional #tags. Two bullets produce records:

  @  event   the annotation is a time:  @ [9:30a] Morning Meeting #work
  !  task    the annotation is a state: ! [doing] Scrub the kitchen floor

QUICK START:
  bujo parse \"@ [12:00 pm] Lunch #food\"     Parse one line
  bujo lex \"- [greeting] hello #today\"     Show the tokens of a line
  bujo config init                         Write a default config file

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Overrides `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    ///
    /// Logs go to stderr. `BUJO_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse journal lines into records
    ///
    /// Each argument is one journal line and is parsed on its own. If any
    /// line is rejected, nothing is printed and the error is reported.
    ///
    /// # Examples
    ///
    ///   bujo parse "@ Conference"
    ///   bujo parse "@ [9:30a] Morning Meeting" "! [doing] Dishes #home"
    ///   bujo p "! Take out the papers #andthetrash" -o json
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Show the tokens of a journal line
    ///
    /// Prints the bullet, annotation, text and tag tokens in order.
    ///
    /// # Examples
    ///
    ///   bujo lex "- [greeting] hello there #today"
    #[command(alias = "l")]
    Lex(LexArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Journal lines to parse, one record per argument
    #[arg(required = true, allow_hyphen_values = true)]
    pub lines: Vec<String>,
}

#[derive(Args)]
pub struct LexArgs {
    /// The journal line to tokenize
    #[arg(allow_hyphen_values = true)]
    pub line: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_requires_a_line() {
        assert!(Cli::try_parse_from(["bujo", "parse"]).is_err());
    }

    #[test]
    fn test_global_output_before_subcommand() {
        let cli = Cli::try_parse_from(["bujo", "-o", "json", "parse", "@ x"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["bujo", "-vv", "lex", "- x"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_lex_accepts_dash_bullet() {
        let cli = Cli::try_parse_from(["bujo", "lex", "- hello there"]).unwrap();
        let Commands::Lex(args) = cli.command else {
            panic!("expected lex command");
        };
        assert_eq!(args.line, "- hello there");
    }

    #[test]
    fn test_parse_alias() {
        let cli = Cli::try_parse_from(["bujo", "p", "@ a", "! b"]).unwrap();
        let Commands::Parse(args) = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(args.lines, vec!["@ a", "! b"]);
    }
}
