//! shorkfetch - a lightweight Linux system summary
//!
//! Prints the OS, kernel, uptime, shell, CPU, GPUs, memory, swap and root
//! filesystem usage as short labelled lines, similar to neofetch:
//! - Reads procfs, sysfs and /etc directly (no external commands)
//! - Names GPUs from their PCI ids via pci.ids
//! - Strips vendor boilerplate from CPU and GPU names

mod config;
mod hardware;
mod text;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::hardware::gpu::GpuResolver;
use crate::hardware::SystemInfo;

/// shorkfetch - show a short summary of this system
#[derive(Parser)]
#[command(name = "shorkfetch")]
#[command(version)]
#[command(about = "Show basic system and environment information")]
struct Cli {
    /// Print the result as JSON instead of labelled lines
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the system summary (default)
    Show,

    /// List display controllers with their PCI ids and resolved names
    Gpus,

    /// Show configuration path and effective settings
    Config {
        /// Write the default configuration file if it does not exist yet
        #[arg(long, default_value_t = false)]
        init: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the summary only
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default();
    let color = config.display.color && !cli.no_color && io::stdout().is_terminal();
    colored::control::set_override(color);

    match cli.command {
        Some(Commands::Show) | None => show_summary(&config, cli.json, color)?,
        Some(Commands::Gpus) => list_gpus(&config, cli.json)?,
        Some(Commands::Config { init }) => show_config_info(&config, init)?,
    }

    Ok(())
}

fn show_summary(config: &Config, json: bool, color: bool) -> Result<()> {
    let system_info = SystemInfo::detect(config);

    if json {
        let output = serde_json::to_string_pretty(&system_info)
            .context("Failed to serialize system info")?;
        println!("{}", output);
    } else {
        print!("{}", system_info.display(color));
    }

    Ok(())
}

fn list_gpus(config: &Config, json: bool) -> Result<()> {
    let resolver = GpuResolver::new(
        config.pci.database_paths.clone(),
        config.pci.integrated_table,
    );
    let gpus = resolver.detect(&config.sysfs.pci_devices_dir, config.sysfs.max_gpus);

    if json {
        let output =
            serde_json::to_string_pretty(&gpus).context("Failed to serialize GPU list")?;
        println!("{}", output);
        return Ok(());
    }

    if gpus.is_empty() {
        println!(
            "{} {}",
            "No display controllers found under".bright_yellow(),
            config.sysfs.pci_devices_dir.display()
        );
        return Ok(());
    }

    for gpu in &gpus {
        println!("{}  {}", gpu.id.to_string().bright_cyan(), gpu.name);
    }

    Ok(())
}

fn show_config_info(config: &Config, init: bool) -> Result<()> {
    println!("{}", "shorkfetch configuration\n".bright_cyan().bold());

    let path = Config::config_path()?;
    println!(
        "{} {}",
        "Config file:".bright_yellow(),
        path.display().to_string().bright_white()
    );

    if path.exists() {
        println!("  {} {}", "Status:".bright_cyan(), "Exists".bright_green());
    } else if init {
        let written = config.save()?;
        println!(
            "  {} {}",
            "Status:".bright_cyan(),
            format!("Created {}", written.display()).bright_green()
        );
    } else {
        println!(
            "  {} {}",
            "Status:".bright_cyan(),
            "Not created (using defaults, run `shorkfetch config --init`)".bright_yellow()
        );
    }

    let toml = toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
    println!("\n{}", "Effective settings:".bright_white().bold());
    println!("{}", toml);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn no_subcommand_shows_summary() {
        let cli = Cli::try_parse_from(["shorkfetch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_apply_to_subcommands() {
        let cli = Cli::try_parse_from(["shorkfetch", "gpus", "--json", "-vv"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Gpus)));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn config_init_flag() {
        let cli = Cli::try_parse_from(["shorkfetch", "config", "--init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { init: true })));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["shorkfetch", "--bogus"]).is_err());
    }
}
