use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use console::Term;
use once_cell::sync::Lazy;
use serde::Serialize;
use stockroom::api::{CategorySummary, CmdMessage, MessageLevel};
use stockroom::config::StockConfig;
use stockroom::error::Result;
use stockroom::model::{Product, ProductStatus};
use stockroom::view::{CapacityTier, DetailPanel, InventoryView, ProductCard};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_LINE_WIDTH: usize = 110;
const MIN_NAME_WIDTH: usize = 12;
const SELECTED_MARKER: &str = "▸";

/// Terminal width, capped so the grid stays readable on wide screens.
static LINE_WIDTH: Lazy<usize> = Lazy::new(|| {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(MAX_LINE_WIDTH)
        .min(MAX_LINE_WIDTH)
});

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_view(view: &InventoryView, currency: &str) {
    let controls = &view.controls;
    let mut header = format!(
        "Showing {} of {} products · sort: {} · category: {} · status: {}",
        view.shown, view.total, controls.sort, controls.category, controls.status
    );
    if !controls.search.is_empty() {
        header.push_str(&format!(" · search: \"{}\"", controls.search));
    }
    println!("{}", header.dimmed());
    println!();

    if view.cards.is_empty() {
        println!("    No products found.");
    } else {
        for card in &view.cards {
            println!("{}", format_card(card, currency));
        }
    }

    println!();
    match &view.detail {
        DetailPanel::Product(product) => print_product_detail(product, currency),
        DetailPanel::Placeholder => println!("{}", "No product selected.".dimmed()),
    }
}

fn format_card(card: &ProductCard, currency: &str) -> String {
    let marker = if card.selected { SELECTED_MARKER } else { " " };
    let id = format!("#{}", card.id);
    let price = format_price(card.price, currency);
    let stock = format!("{:>5} pcs", card.stock);
    let capacity = format!("{:>3.0}%", card.capacity);
    let status = format!("{:<12}", card.status.label());

    let fixed = 2 + 16 + 2 + 12 + 2 + 5 + 9 + 2 + 12 + 2 + 4;
    let name_width = LINE_WIDTH.saturating_sub(fixed).max(MIN_NAME_WIDTH);
    let title = if card.category.is_empty() {
        format!("{} ({})", card.name, card.sku)
    } else {
        format!("{} ({}) · {}", card.name, card.sku, card.category)
    };
    let title = truncate_to_width(&title, name_width);
    let padding = name_width.saturating_sub(title.width());

    let id_colored = if card.selected {
        format!("{:<16}", id).bold()
    } else {
        format!("{:<16}", id).normal()
    };

    format!(
        "{} {}  {}{}  {:>12}  {}  {}  {}",
        marker,
        id_colored,
        title,
        " ".repeat(padding),
        price,
        stock,
        status_colored(&card.status, &status),
        tier_colored(card.tier, &capacity),
    )
}

pub(super) fn print_product_detail(product: &Product, currency: &str) {
    println!("{} {}", format!("#{}", product.id).yellow(), product.name.bold());
    println!("--------------------------------");
    print_field("SKU", &product.sku);
    print_field("Category", &product.category);
    print_field("Price", &format_price(product.price, currency));
    print_field("Stock", &product.stock.to_string());
    println!(
        "  {:<10}{}",
        "Status",
        status_colored(&product.status, product.status.label())
    );
    let capacity = product.capacity_percent();
    println!(
        "  {:<10}{}",
        "Capacity",
        tier_colored(
            CapacityTier::for_capacity(capacity),
            &format!("{:.0}%", capacity)
        )
    );
    print_field("Brand", &product.brand);
    print_field("Location", &product.location);
    print_field("Weight", &product.weight);
    print_field("Image", &product.image);
    if !product.updated_at.is_empty() {
        print_field("Updated", &format_updated(&product.updated_at));
    }
}

pub(super) fn print_categories(categories: &[CategorySummary]) {
    if categories.is_empty() {
        println!("No categories found.");
        return;
    }
    let width = categories
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0);
    for category in categories {
        let padding = width.saturating_sub(category.name.width());
        println!(
            "  {}{}  {}",
            category.name,
            " ".repeat(padding),
            category.count.to_string().dimmed()
        );
    }
}

pub(super) fn print_config(config: &StockConfig) {
    println!("default-sort = {}", config.default_sort);
    println!("currency     = {}", config.currency);
    println!("data-file    = {}", config.data_file);
}

fn print_field(label: &str, value: &str) {
    if value.is_empty() {
        println!("  {:<10}{}", label, "-".dimmed());
    } else {
        println!("  {:<10}{}", label, value);
    }
}

fn format_price(price: Option<f64>, currency: &str) -> String {
    match price {
        Some(p) => format!("{}{:.2}", currency, p),
        None => "-".to_string(),
    }
}

fn status_colored(status: &ProductStatus, text: &str) -> ColoredString {
    match status {
        ProductStatus::InStock => text.green(),
        ProductStatus::OutOfStock => text.red(),
        ProductStatus::Other(_) => text.dimmed(),
    }
}

fn tier_colored(tier: CapacityTier, text: &str) -> ColoredString {
    match tier {
        CapacityTier::Normal => text.normal(),
        CapacityTier::Warning => text.yellow(),
        CapacityTier::Critical => text.red().bold(),
    }
}

/// Relative time for RFC 3339 stamps, the raw text otherwise.
fn format_updated(updated_at: &str) -> String {
    match DateTime::parse_from_rfc3339(updated_at) {
        Ok(stamp) => {
            let elapsed = Utc::now().signed_duration_since(stamp.with_timezone(&Utc));
            Formatter::new().convert(elapsed.to_std().unwrap_or_default())
        }
        Err(_) => updated_at.to_string(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a long product name", 8), "a long …");
        assert_eq!(truncate_to_width("日本語の名前", 5), "日本…");
    }

    #[test]
    fn prices_use_currency_and_dash_for_missing() {
        assert_eq!(format_price(Some(3.5), "$"), "$3.50");
        assert_eq!(format_price(None, "€"), "-");
    }

    #[test]
    fn updated_falls_back_to_raw_text() {
        assert_eq!(format_updated("last tuesday"), "last tuesday");
        assert!(format_updated("2020-01-01T00:00:00Z").ends_with("ago"));
    }
}
