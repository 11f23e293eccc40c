use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use std::path::Path;

use crate::content::Showcase;

/// Run the check command: parse the showcase, validate the contact
/// number, and decode every referenced asset.
pub fn run(file: &Path) -> Result<()> {
    println!("Checking {}\n", file.display());

    let showcase =
        Showcase::load(file).with_context(|| format!("Failed to load {}", file.display()))?;

    let mut problems = 0;

    println!(
        "{} showcase parses ({} hero, {} gallery, {} packages, {} videos)",
        "✓".green(),
        showcase.hero.len(),
        showcase.gallery.len(),
        showcase.packages.len(),
        showcase.videos.len(),
    );

    if whatsapp_is_valid(&showcase.brand.whatsapp) {
        println!(
            "{} whatsapp number {}",
            "✓".green(),
            showcase.brand.whatsapp
        );
    } else {
        println!(
            "{} whatsapp number {:?}: digits only, international format without '+'",
            "✗".red(),
            showcase.brand.whatsapp
        );
        problems += 1;
    }

    // Links to empty sections are legal but dead, so only warn.
    let live_sections = showcase.sections();
    for link in &showcase.nav {
        if !live_sections.contains(&link.section) {
            println!(
                "{} nav link {:?} targets a section with no content",
                "⚠".yellow(),
                link.label
            );
        }
    }

    let base = file.parent().unwrap_or(Path::new("."));
    let results: Vec<(String, std::result::Result<(u32, u32), String>)> = showcase
        .asset_paths()
        .par_iter()
        .map(|path| {
            let decoded = image::open(base.join(path))
                .map(|img| (img.width(), img.height()))
                .map_err(|e| e.to_string());
            (path.display().to_string(), decoded)
        })
        .collect();

    for (path, decoded) in &results {
        match decoded {
            Ok((w, h)) => println!("{} asset {path} ({w}x{h})", "✓".green()),
            Err(e) => {
                println!("{} asset {path}: {e}", "✗".red());
                problems += 1;
            }
        }
    }

    println!();
    if problems > 0 {
        anyhow::bail!("{problems} problem(s) found");
    }
    println!("{}", "Showcase is valid.".green().bold());
    Ok(())
}

fn whatsapp_is_valid(number: &str) -> bool {
    !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_digits_only() {
        assert!(whatsapp_is_valid("6282110821485"));
        assert!(!whatsapp_is_valid(""));
        assert!(!whatsapp_is_valid("+62 821"));
        assert!(!whatsapp_is_valid("62-821"));
    }
}
