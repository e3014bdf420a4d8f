//! Pages and routing
//!
//! Routes: `/`, `/list`, `/company/info`. `/company` and anything below it
//! redirect to `/company/info`.

pub mod company;
pub mod home;
pub mod layout;
pub mod list;

use crate::core::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    List,
    CompanyInfo,
}

impl Route {
    /// Resolve a path, following the company redirects
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/list" => Some(Route::List),
            "/company" => Some(Route::CompanyInfo),
            p if p.starts_with("/company/") => Some(Route::CompanyInfo),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::List => "List",
            Route::CompanyInfo => "Company Info",
        }
    }

    /// Company Info is always rendered in the default theme without tabs
    pub fn shows_theme_tabs(&self) -> bool {
        !matches!(self, Route::CompanyInfo)
    }

    pub fn effective_theme(&self, theme: Theme) -> Theme {
        if self.shows_theme_tabs() {
            theme
        } else {
            Theme::default()
        }
    }
}
