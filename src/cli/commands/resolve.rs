//! Resolve and render commands.

use askama::Template;
use console::style;

use crate::config::Settings;
use crate::pages::PageName;
use crate::resolver::AssetResolver;
use crate::server::{PageRenderer, RenderedPage, ViewState, ViewerTemplate};

/// Resolve one page and report the outcome.
///
/// Fails (non-zero exit) when the page cannot be shown.
pub fn cmd_resolve(settings: &Settings, page: PageName) -> anyhow::Result<()> {
    let resolver = AssetResolver::new(settings.anchors()?);

    match PageRenderer::new(&resolver).render(page) {
        RenderedPage::Embedded {
            source, content, ..
        } => {
            println!(
                "{} {} -> {} ({} bytes)",
                style("✓").green(),
                page,
                source.display(),
                content.len()
            );
            Ok(())
        }
        RenderedPage::Diagnostic(report) => {
            eprintln!("{} {}", style("✗").red(), report.to_text().trim_end());
            anyhow::bail!("{}: {}", report.kind.label(), page)
        }
    }
}

/// Write the full viewer page for `page` to stdout.
pub fn cmd_render(settings: &Settings, page: PageName) -> anyhow::Result<()> {
    let resolver = AssetResolver::new(settings.anchors()?);
    let view = ViewState::Rendered(PageRenderer::new(&resolver).render(page));

    let html = ViewerTemplate::from_view(&view, settings.embed_height).render()?;
    println!("{}", html);
    Ok(())
}
