use crate::cli_args::{FormatOpts, ShowArgs, ShowItem};
use crate::load_config_for_command;
use crate::output::print_data_or_text;
use anyhow::{Context, Result};
use colored::*;
use treemark_core::{self as core, Config};

pub fn handle_show_command(args: ShowArgs) -> Result<()> {
    let project_root = Config::determine_project_root(args.project_config.project_root.as_ref())
        .context("Failed to determine project root")?;
    log::info!("Project root determined: {}", project_root.display());

    let config = load_config_for_command(&project_root, &args.project_config, None)
        .context("Failed to load configuration for show command")?;

    match &args.item {
        ShowItem::Excludes {} => handle_show_excludes(&config, &args.format_output),
        ShowItem::Markers {} => handle_show_markers(&config, &args.format_output),
        ShowItem::Config {} => handle_show_config(&config, &args.format_output),
    }
}

fn handle_show_excludes(config: &Config, format_opts: &FormatOpts) -> Result<()> {
    let excludes = core::resolve_excludes(config);

    let pretty_text = if format_opts.is_text() {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            "\n--- Effective Exclusion Set ---".green().bold().underline()
        ));
        if excludes.is_empty() {
            output.push_str(&format!("  {}\n", "(empty)".dimmed()));
        } else {
            for name in excludes.names() {
                output.push_str(&format!("  - {}\n", name.blue()));
            }
        }
        Some(output)
    } else {
        None
    };

    print_data_or_text(&excludes.names(), pretty_text, format_opts)
}

fn handle_show_markers(config: &Config, format_opts: &FormatOpts) -> Result<()> {
    let tables = core::resolve_markers(config);

    let pretty_text = if format_opts.is_text() {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            "\n--- Effective Classification Tables ---"
                .green()
                .bold()
                .underline()
        ));
        output.push_str(&format!(
            "  {:<12} {}\n",
            "Directory:".green(),
            tables.directory
        ));
        output.push_str(&format!(
            "  {:<12} {}\n",
            "Default:".green(),
            tables.default
        ));

        output.push_str(&format!(
            "\n{}\n",
            " Name Patterns (checked first, in order) ".green().bold()
        ));
        if tables.name_patterns.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        } else {
            for rule in &tables.name_patterns {
                output.push_str(&format!("  {:<18} {}\n", rule.pattern.blue(), rule.marker));
            }
        }

        output.push_str(&format!("\n{}\n", " Extensions ".green().bold()));
        if tables.extensions.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        } else {
            for (ext, marker) in &tables.extensions {
                output.push_str(&format!("  {:<18} {}\n", ext.blue(), marker));
            }
        }
        Some(output)
    } else {
        None
    };

    print_data_or_text(&tables, pretty_text, format_opts)
}

fn handle_show_config(config: &Config, format_opts: &FormatOpts) -> Result<()> {
    let toml_text = config
        .to_toml_string()
        .context("Failed to serialize effective configuration")?;
    print_data_or_text(config, Some(toml_text), format_opts)
}
