use crate::cli_args::StatsArgs;
use crate::load_config_for_command;
use crate::output;
use anyhow::{Context, Result};
use treemark_core::{self as core, Classifier, Config, TreeStats, TreeWalker};

pub fn handle_stats_command(args: StatsArgs) -> Result<()> {
    let project_root = Config::determine_project_root(args.project_config.project_root.as_ref())
        .context("Failed to determine project root")?;
    log::info!("Project root determined: {}", project_root.display());

    let config = load_config_for_command(&project_root, &args.project_config, None)
        .context("Failed to load configuration for stats command")?;

    let excludes = core::resolve_excludes(&config);
    let classifier = Classifier::new(core::resolve_markers(&config));
    let walker = TreeWalker::new(&classifier, &excludes);
    let lines = walker
        .walk(&project_root)
        .context("Failed to walk project directory")?;
    let stats = TreeStats::from_lines(&lines);

    if args.format_output.is_text() {
        output::print_stats_table(&stats)
    } else {
        output::print_data_or_text(&stats, None, &args.format_output)
    }
}
