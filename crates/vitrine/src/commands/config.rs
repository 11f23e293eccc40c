use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

/// Run the config command.
pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    if !path.exists() {
        println!(
            "No config file at {} {}",
            path.display(),
            "(using defaults)".dimmed()
        );
        return Ok(());
    }
    let contents = std::fs::read_to_string(&path)?;
    println!("{}", format!("# {}", path.display()).dimmed());
    print!("{contents}");
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!("{} {key} = {value}", "Set".green().bold());
    println!("Saved to {}", path.display());
    Ok(())
}
