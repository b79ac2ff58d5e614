use crate::cli_args::ConfigArgs;
use crate::output;
use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use std::path::Path;
use treemark_core::Config;
use treemark_core::config::DEFAULT_CONFIG_FILENAME;

pub fn handle_config_command(args: &ConfigArgs, project_root: &Path, quiet: bool) -> Result<()> {
    let default_config = Config::default();
    let toml_text = default_config
        .to_toml_string()
        .context("Failed to serialize default configuration")?;

    if !args.save {
        output::write_to_stdout(&toml_text)?;
        return Ok(());
    }

    let save_path = project_root.join(DEFAULT_CONFIG_FILENAME);
    if save_path.exists() {
        if !quiet {
            print!(
                "{} Config file already exists at '{}'. Overwrite? [{}/{}] ",
                "⚠️".yellow(),
                save_path.display().to_string().cyan(),
                "y".green(),
                "N".red()
            );
            io::stdout().flush().context("Failed to flush stdout")?;
            let mut response = String::new();
            io::stdin()
                .read_line(&mut response)
                .context("Failed to read user input")?;
            if !response.trim().eq_ignore_ascii_case("y") {
                println!("Save cancelled.");
                return Ok(());
            }
        } else {
            anyhow::bail!(
                "Target file '{}' exists. Overwrite prevented in quiet mode.",
                save_path.display()
            );
        }
    }

    output::write_to_file(&save_path, &toml_text)?;
    if !quiet {
        println!(
            "{} Default configuration saved to: {}",
            "✅".green(),
            save_path.display().to_string().blue()
        );
    }
    Ok(())
}
