//! The `browse` command: print one page of the product listing.

use shopfront_catalog::{assemble_page, CatalogPage, DisplayRecord};
use shopfront_content::ContentClient;
use shopfront_core::AppConfig;

pub async fn run(config: &AppConfig, page: usize) -> anyhow::Result<()> {
    let storefront = shopfront_core::load_storefront(&config.storefront_path)?;
    let content = ContentClient::from_app_config(config)?;

    // Transport failure degrades to an empty listing; the diagnostic goes
    // to the log, not the terminal output.
    let records = match content.fetch_list().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "listing fetch failed; showing empty listing");
            Vec::new()
        }
    };

    let catalog_page = assemble_page(records, page, config.page_size);
    print!("{}", render_page(&storefront.heading, &catalog_page));
    Ok(())
}

fn render_page(heading: &str, page: &CatalogPage) -> String {
    let mut lines = vec![heading.to_string()];

    match page.showing {
        Some(range) => lines.push(format!(
            "Showing {}-{} of {} Products",
            range.from, range.to, page.total_items
        )),
        None => lines.push("No products to show".to_string()),
    }

    for item in &page.items {
        lines.push(String::new());
        lines.extend(render_card(item));
    }

    if page.total_pages > 1 {
        lines.push(String::new());
        lines.push(format!("Page {} of {}", page.page, page.total_pages));
    }

    lines.join("\n") + "\n"
}

fn render_card(item: &DisplayRecord) -> Vec<String> {
    let mut price_line = format!("  {}", item.price_label());
    if let (Some(old), Some(badge)) = (item.old_price_label(), item.badge_label()) {
        price_line.push_str(&format!("  {old}  {badge}"));
    }

    vec![
        item.name.clone(),
        format!("  {} {}", item.stars().glyphs(), item.rating_label()),
        price_line,
        format!("  {}", item.detail_route()),
    ]
}
