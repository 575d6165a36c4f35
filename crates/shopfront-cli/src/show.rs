//! The `show` command: print the detail view for one product slug.

use anyhow::Context;

use shopfront_catalog::{DetailView, ProductDetail};
use shopfront_content::ContentClient;
use shopfront_core::AppConfig;

pub async fn run(config: &AppConfig, slug: &str) -> anyhow::Result<()> {
    let content = ContentClient::from_app_config(config)?;

    let record = content
        .fetch_one(slug)
        .await
        .with_context(|| format!("failed to fetch product \"{slug}\""))?;

    match ProductDetail::from_fetch(record) {
        ProductDetail::NotFound => println!("Product not found"),
        ProductDetail::Found(view) => print!("{}", render_detail(&view)),
    }
    Ok(())
}

fn render_detail(view: &DetailView) -> String {
    let mut lines = vec![
        view.name.clone(),
        format!("{} {}", view.stars().glyphs(), view.rating_label()),
    ];

    let mut price_line = view.price_label();
    if let (Some(old), Some(badge)) = (view.old_price_label(), view.badge_label()) {
        price_line.push_str(&format!("  {old}  {badge}"));
    }
    lines.push(price_line);

    if !view.description.is_empty() {
        lines.push(String::new());
        lines.push(view.description.clone());
    }

    if !view.colors.is_empty() {
        lines.push(format!("Colors: {}", view.colors.join(", ")));
    }
    if !view.sizes.is_empty() {
        lines.push(format!("Sizes: {}", view.sizes.join(", ")));
    }

    lines.join("\n") + "\n"
}
