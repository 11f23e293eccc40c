use colored::Colorize;

/// Print the version banner for `vitrine version`.
pub fn print_banner_with_version() {
    println!();
    println!(
        "  {} {}",
        "vitrine".cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("  A YAML-driven showcase kiosk for marketing presentations");
    println!();
    println!("  {}", env!("CARGO_PKG_REPOSITORY").dimmed());
    println!();
}
