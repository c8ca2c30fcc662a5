use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use photoarchive_core::VERSION;

/// Photo Archive - a small catalog of photo metadata kept in a flat text file
#[derive(Parser)]
#[command(name = "photoarchive")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the archive file
    #[arg(short, long, global = true, env = "PHOTOARCHIVE_PATH")]
    pub archive: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default when no command is given)
    Menu,

    /// List all photos in archive order
    List(ListArgs),

    /// Show one photo by its position
    Show(ShowArgs),

    /// Add a photo and save the archive
    Add(AddArgs),

    /// Search photos
    Search(SearchArgs),

    /// Sort by date, category, then resolution and save the archive
    Sort,

    /// Check how much of the archive file loads
    Check,

    /// Manage the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Position in the archive (1-based, as printed by `list`)
    #[arg(value_name = "N")]
    pub position: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command
///
/// Missing fields are prompted for on a terminal.
#[derive(Args)]
pub struct AddArgs {
    /// Photo title (max 49 characters)
    #[arg(long)]
    pub name: Option<String>,

    /// Capture date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Where the photo was taken (max 49 characters)
    #[arg(long)]
    pub place: Option<String>,

    /// Category (max 29 characters)
    #[arg(long)]
    pub category: Option<String>,

    /// Comma-separated tags (max 99 characters)
    #[arg(long)]
    pub tags: Option<String>,

    /// File size in MB (comma or dot decimal separator)
    #[arg(long, value_name = "MB")]
    pub size: Option<String>,

    /// Width in pixels
    #[arg(long)]
    pub width: Option<String>,

    /// Height in pixels
    #[arg(long)]
    pub height: Option<String>,

    /// File format, e.g. JPG (max 9 characters)
    #[arg(long)]
    pub format: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    #[command(subcommand)]
    pub command: SearchSubcommand,
}

#[derive(Subcommand)]
pub enum SearchSubcommand {
    /// Photos whose place contains QUERY (case-sensitive)
    Place(PlaceSearchArgs),

    /// Photos taken on DATE whose tags contain TAG
    DateTag(DateTagSearchArgs),
}

/// Arguments for `search place`
#[derive(Args)]
pub struct PlaceSearchArgs {
    /// Substring to look for in the place field
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for `search date-tag`
#[derive(Args)]
pub struct DateTagSearchArgs {
    /// Exact capture date (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Substring to look for in the tags field
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Write a starter config file
    Init(ConfigInitArgs),

    /// Print the resolved config and archive paths
    Path,
}

/// Arguments for `config init`
#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["photoarchive"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_search_date_tag_parses() {
        let cli =
            Cli::try_parse_from(["photoarchive", "search", "date-tag", "2023-07-01", "sunset"])
                .unwrap();
        match cli.command {
            Some(Commands::Search(args)) => match args.command {
                SearchSubcommand::DateTag(args) => {
                    assert_eq!(args.date, "2023-07-01");
                    assert_eq!(args.tag, "sunset");
                }
                SearchSubcommand::Place(_) => panic!("expected date-tag"),
            },
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_global_archive_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["photoarchive", "list", "--archive", "/tmp/a.txt"]).unwrap();
        assert_eq!(cli.archive.as_deref(), Some("/tmp/a.txt"));
    }
}
