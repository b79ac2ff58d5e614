use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ProjectConfigOpts {
    #[arg(
        long,
        help = "Specify the target project directory (default: current dir).",
        help_heading = "Project Setup",
        value_name = "PATH"
    )]
    pub project_root: Option<PathBuf>,

    #[arg(
        long,
        help = "Specify path/filename of the TOML config file (default: treemark.toml).",
        value_name = "CONFIG_FILE",
        conflicts_with = "disable_config_file",
        help_heading = "Project Setup"
    )]
    pub config_file: Option<String>,

    #[arg(
        long,
        help = "Disable loading any TOML config file.",
        conflicts_with = "config_file",
        help_heading = "Project Setup"
    )]
    pub disable_config_file: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FormatOpts {
    #[arg(short = 'f', long, help = "Set the output format.", value_name = "FORMAT", value_parser = ["text", "json"], help_heading = "Output Formatting")]
    pub format: Option<String>,
}

impl FormatOpts {
    /// The format flag defaults to text output when absent.
    pub fn is_text(&self) -> bool {
        self.format
            .as_deref()
            .unwrap_or("text")
            .eq_ignore_ascii_case("text")
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "treemark",
    author,
    version,
    about = "Render an annotated project tree into a markdown document.",
    long_about = "treemark walks a project directory and renders its structure as an \nemoji-annotated text tree wrapped in a fixed markdown document. \nThe exclusion set and the marker tables are configurable per project.",
    help_template = "{about-section}\nUsage: {usage}\n\n{all-args}{after-help}",
    after_help = "EXAMPLES:\n  treemark generate\n  treemark generate --stdout --exclude secrets\n  treemark stats -f json\n  treemark show markers\n  treemark config --save",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        help = "Silence informational messages and warnings."
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(
        visible_alias = "g",
        visible_alias = "gen",
        about = "Generate the project tree document."
    )]
    Generate(GenerateArgs),

    #[command(visible_alias = "st", about = "Calculate and display tree statistics.")]
    Stats(StatsArgs),

    #[command(
        visible_alias = "s",
        about = "Show the effective excludes, markers, or configuration."
    )]
    Show(ShowArgs),

    #[command(about = "Show or save the default configuration file structure.")]
    Config(ConfigArgs),

    #[command(about = "Generate or save shell completion scripts.")]
    Completion(CompletionArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[clap(flatten)]
    pub project_config: ProjectConfigOpts,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the document to FILE (overrides the configured filename).",
        help_heading = "Output Control",
        conflicts_with = "stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        help = "Print the document to standard output instead of a file.",
        help_heading = "Output Control",
        conflicts_with = "output"
    )]
    pub stdout: bool,

    #[arg(long = "exclude", value_name = "NAME", action = clap::ArgAction::Append, help = "Add an entry name to the exclusion set (repeatable).", help_heading = "Tree Filtering")]
    pub exclude: Vec<String>,

    #[arg(
        long,
        help = "Ignore the builtin exclusion entries.",
        help_heading = "Tree Filtering"
    )]
    pub no_default_excludes: bool,

    #[arg(
        long,
        help = "Ignore the builtin marker tables.",
        help_heading = "Tree Filtering"
    )]
    pub no_default_markers: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[clap(flatten)]
    pub project_config: ProjectConfigOpts,
    #[clap(flatten)]
    pub format_output: FormatOpts,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[clap(flatten)]
    pub project_config: ProjectConfigOpts,
    #[clap(flatten)]
    pub format_output: FormatOpts,
    #[command(subcommand)]
    pub item: ShowItem,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ShowItem {
    #[command(about = "Show the effective exclusion set.")]
    Excludes {},
    #[command(about = "Show the effective classification tables.")]
    Markers {},
    #[command(about = "Show the effective configuration as TOML.")]
    Config {},
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(
        long,
        help = "Save default config structure to default path (prompts overwrite)."
    )]
    pub save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionArgs {
    #[arg(
        long,
        value_name = "SHELL",
        help = "Shell to generate completions for (fish, bash, zsh) [default: fish]"
    )]
    pub shell: Option<String>,
    #[arg(
        long,
        help = "Save completion script to default location (prompts overwrite)."
    )]
    pub save: bool,
}
