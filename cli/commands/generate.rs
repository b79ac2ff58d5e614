use crate::cli_args::GenerateArgs;
use crate::load_config_for_command;
use crate::output;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use treemark_core::{self as core, Classifier, Config, TreeStats, TreeWalker};

pub fn handle_generate_command(args: GenerateArgs, quiet: bool) -> Result<()> {
    let project_root = Config::determine_project_root(args.project_config.project_root.as_ref())
        .context("Failed to determine project root")?;
    log::info!("Project root determined: {}", project_root.display());

    let config = load_config_for_command(&project_root, &args.project_config, Some(&args))
        .context("Failed to load configuration")?;

    let excludes = core::resolve_excludes(&config);
    let classifier = Classifier::new(core::resolve_markers(&config));
    let walker = TreeWalker::new(&classifier, &excludes);

    let lines = walker
        .walk(&project_root)
        .context("Failed to walk project directory")?;
    let stats = TreeStats::from_lines(&lines);
    log::info!(
        "Rendered {} entries ({} directories, {} files).",
        stats.total_entries,
        stats.directories,
        stats.files
    );

    let document = core::render_document(&lines);

    if args.stdout {
        log::debug!("Output target set to stdout (forced).");
        output::write_to_stdout(&document)?;
    } else {
        let output_path = resolve_output_path(&config, &project_root);
        log::debug!("Output target path set to file: {}", output_path.display());
        output::write_to_file(&output_path, &document)?;
        if !quiet {
            println!(
                "{} Project tree saved to: {}",
                "✅".green(),
                output_path.display().to_string().blue()
            );
        }
    }
    Ok(())
}

// The configured filename may be absolute or carry subdirectories;
// relative ones are anchored at the project root.
fn resolve_output_path(config: &Config, project_root: &Path) -> PathBuf {
    let configured = Path::new(&config.output.filename);
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        project_root.join(configured)
    }
}
