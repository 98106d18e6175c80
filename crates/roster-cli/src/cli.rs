use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use roster_core::VERSION;

/// Roster - keep a small contact list from the command line
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the roster data
    #[arg(short, long, global = true, env = "ROSTER_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args, Default)]
pub struct AddArgs {
    /// First name (letters only)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name (letters only)
    #[arg(long)]
    pub last_name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number (non-digits are stripped, 10 digits kept)
    #[arg(long)]
    pub phone: Option<String>,

    /// State (see `roster regions`)
    #[arg(long)]
    pub state: Option<String>,

    /// City within the state
    #[arg(long)]
    pub city: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
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

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in names, email, phone, state and city
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Person ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `regions` command
#[derive(Args)]
pub struct RegionsArgs {
    /// Show the cities of one state
    #[arg(value_name = "STATE")]
    pub state: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and create the data directory
    Init(InitArgs),

    /// Add a person
    Add(AddArgs),

    /// List every person
    List(ListArgs),

    /// Search persons by free text
    Search(SearchArgs),

    /// Delete a person by ID
    Delete(DeleteArgs),

    /// Show the known states and cities
    Regions(RegionsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
