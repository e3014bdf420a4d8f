//! Page chrome: navigation header and theme tabs

use super::Route;
use crate::core::Theme;

const NAV: [Route; 3] = [Route::Home, Route::List, Route::CompanyInfo];

/// Render the header for `route` with the session theme
pub fn render_header(route: Route, theme: Theme) -> String {
    let nav: Vec<String> = NAV
        .iter()
        .map(|r| {
            if *r == route {
                format!("[{}]", r.title())
            } else {
                r.title().to_string()
            }
        })
        .collect();

    let mut header = nav.join(" | ");
    if route.shows_theme_tabs() {
        let tabs: Vec<String> = [Theme::Blue, Theme::Pink]
            .iter()
            .map(|t| {
                let label = match t {
                    Theme::Blue => "Blue",
                    Theme::Pink => "Pink",
                };
                if *t == theme { format!("({label})") } else { label.to_string() }
            })
            .collect();
        header.push_str("    Theme: ");
        header.push_str(&tabs.join(" "));
    }
    header
}

/// Header, separator and page body
///
/// The separator names the theme the page is drawn in.
pub fn render_page(route: Route, theme: Theme, body: &str) -> String {
    let theme = route.effective_theme(theme);
    let header = render_header(route, theme);
    let marker = format!("== {theme} ");
    let width = header.chars().count().max(40);
    let rule = format!("{marker}{}", "=".repeat(width.saturating_sub(marker.len())));
    format!("{header}\n{rule}\n{body}")
}
