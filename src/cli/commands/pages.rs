//! Page table listing.

use console::style;

use crate::config::Settings;
use crate::pages::PAGE_TABLE;
use crate::resolver::AssetResolver;

/// Print every known page with its candidate paths.
pub fn cmd_pages(settings: &Settings) -> anyhow::Result<()> {
    let resolver = AssetResolver::new(settings.anchors()?);

    println!("\n{}", style("Pages").bold());
    println!("{}", "-".repeat(60));

    for entry in PAGE_TABLE {
        println!("{:<12} {}", style(entry.name).cyan(), entry.title);
        for (candidate, path) in entry
            .candidates
            .iter()
            .zip(resolver.candidates(entry.name))
        {
            let marker = if path.is_file() {
                style("✓").green()
            } else {
                style("·").dim()
            };
            println!(
                "  {} {:<13} {}",
                marker,
                candidate.anchor.label(),
                path.display()
            );
        }
    }

    Ok(())
}
