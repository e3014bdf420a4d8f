//! Donut List page
//!
//! Renders the catalog load state and, once loaded, the reconciled display
//! order with chomp affordances and the running total.

use crate::core::{OrderManager, SessionStore};
use donut_client::LoadState;
use shared::money::format_pounds;

pub const TITLE: &str = "Donut List";
pub const LOADING_MESSAGE: &str = "Loading donuts...";
pub const ERROR_MESSAGE: &str = "Failed to load donuts. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No donuts available at the moment. Please check back later!";
pub const CONGRATULATIONS: &str =
    "Congratulations! You chomped all the donuts! Try resetting to enjoy again.";
pub const CHOMP_LABEL: &str = "Chomp-a-donut";

/// Render the page for the current load state
///
/// `manager` is only consulted once the catalog has loaded.
pub fn render<S: SessionStore>(state: &LoadState, manager: Option<&OrderManager<S>>) -> String {
    match (state, manager) {
        (LoadState::Error, _) => ERROR_MESSAGE.to_string(),
        (LoadState::Success(_), Some(manager)) => render_list(manager),
        _ => LOADING_MESSAGE.to_string(),
    }
}

/// Render the loaded list
pub fn render_list<S: SessionStore>(manager: &OrderManager<S>) -> String {
    let mut lines = vec![TITLE.to_string(), String::new()];

    let items = manager.items();
    if !items.is_empty() && manager.is_complete() {
        lines.push(CONGRATULATIONS.to_string());
    }
    lines.push(if manager.has_selection() {
        "[Reset]  run `donut-delight reset` to start over".to_string()
    } else {
        "[Reset]  (nothing chomped yet)".to_string()
    });
    lines.push(String::new());

    if items.is_empty() {
        lines.push(EMPTY_MESSAGE.to_string());
    } else {
        lines.push(format!(
            "{:<24} {:<16} {:>7}  {}",
            "Image", "Name", "Price", CHOMP_LABEL
        ));
        lines.push("-".repeat(64));
        for item in items {
            let action = if manager.is_selected(item.id) {
                "chomped".to_string()
            } else {
                format!("[{CHOMP_LABEL} #{}]", item.id)
            };
            lines.push(format!(
                "{:<24} {:<16} {:>7}  {}",
                item.image_path(),
                item.name,
                format_pounds(item.price_decimal()),
                action
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("Total Price: {}", format_pounds(manager.total_price())));
    lines.join("\n")
}
