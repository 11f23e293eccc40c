mod app;
mod banner;
mod booking;
mod carousel;
mod cli;
mod commands;
mod config;
mod contact;
mod content;
mod menu;
mod render;
mod reveal;
mod theme;
mod video;
mod watcher;

use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
