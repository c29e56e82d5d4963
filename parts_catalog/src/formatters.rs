//! Plain-text rendering of the catalog, product details and gallery

use crate::filter::FilterCriteria;
use parts_common::{GalleryEntry, Product};

pub const CONTACT_FOR_PRICE: &str = "Contact for price";

/// Format a price in US dollars (e.g. "$1,899.99"), or "Contact for price"
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price else {
        return CONTACT_FOR_PRICE.to_string();
    };

    let formatted = format!("{:.2}", price.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

pub fn format_product_card(product: &Product) -> String {
    let mut output = format!(
        "[{}] {} • {}\n",
        product.id,
        product.title,
        product.generation.to_uppercase()
    );
    output.push_str(&format!("    {}\n", product.brand));
    output.push_str(&format!("    {}\n", format_price(product.price)));
    if !product.link.trim().is_empty() {
        output.push_str(&format!("    View / Buy: {}\n", product.link));
    }
    output
}

pub fn format_product_grid(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products match your search.\n".to_string();
    }

    products
        .iter()
        .map(format_product_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Details panel for a single product
pub fn format_product_details(product: &Product) -> String {
    let generation = product
        .generation_tag()
        .map(|g| g.label().to_string())
        .unwrap_or_else(|| product.generation.to_uppercase());
    let category = product
        .category_tag()
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| product.category.clone());

    let mut output = String::new();
    output.push_str(&format!("{}\n", product.title));
    output.push_str("========================\n");
    output.push_str(&format!("Brand:      {}\n", product.brand));
    output.push_str(&format!("Generation: {generation}\n"));
    output.push_str(&format!("Category:   {category}\n"));
    output.push_str(&format!("Price:      {}\n", format_price(product.price)));
    output.push_str(&format!("Image:      {}\n", product.image_or_placeholder()));
    output.push_str(&format!("View / Buy: {}\n", product.link));
    output
}

pub fn format_gallery(entries: &[GalleryEntry]) -> String {
    if entries.is_empty() {
        return "No gallery entries yet.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{} • {} ({})\n",
            entry.name,
            entry.car,
            entry.image_or_placeholder()
        ));
    }
    output
}

/// One-line summary of the active filters, e.g.
/// "Showing 2 of 10 products | E46 | Wheels | Price: Low to High | \"bbs\""
pub fn format_filter_summary(criteria: &FilterCriteria, shown: usize, total: usize) -> String {
    let generation = criteria
        .generation
        .map(|g| g.label())
        .unwrap_or("All generations");
    let category = criteria.category.map(|c| c.label()).unwrap_or("All");

    let mut summary = format!(
        "Showing {shown} of {total} products | {generation} | {category} | {}",
        criteria.sort.label()
    );
    if !criteria.query.is_empty() {
        summary.push_str(&format!(" | \"{}\"", criteria.query));
    }
    summary
}
