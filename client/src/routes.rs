//! Path-to-page resolution and role-aware navigation.
//!
//! The administration page exists only for admins: for everyone else
//! `/admin` resolves like any unknown path and is left out of navigation.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PATH: &str = "/admin";

/// Every page the app can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    DataEntry,
    Records,
    Analytics,
    Profile,
    FormWizard,
    Admin,
    NotFound,
}

/// Sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
}

const BASE_NAV: [NavItem; 5] = [
    NavItem { title: "Dashboard", url: "/" },
    NavItem { title: "Data Entry", url: "/data-entry" },
    NavItem { title: "Records", url: "/records" },
    NavItem { title: "Analytics", url: "/analytics" },
    NavItem { title: "Profile", url: "/profile" },
];

const ADMIN_NAV: NavItem = NavItem { title: "Admin Panel", url: ADMIN_PATH };

/// Drop query string, fragment and trailing slashes.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// Page rendered for `path` under `session`.
#[must_use]
pub fn resolve(path: &str, session: &SessionState) -> Page {
    let SessionState::Authenticated(user) = session else {
        return Page::Login;
    };
    match normalize_path(path) {
        "/" => Page::Dashboard,
        "/data-entry" => Page::DataEntry,
        "/records" => Page::Records,
        "/analytics" => Page::Analytics,
        "/profile" => Page::Profile,
        "/form-wizard" => Page::FormWizard,
        ADMIN_PATH if user.is_admin() => Page::Admin,
        _ => Page::NotFound,
    }
}

/// Sidebar entries visible to `role`.
#[must_use]
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let mut items = BASE_NAV.to_vec();
    if role == Role::Admin {
        items.push(ADMIN_NAV);
    }
    items
}

/// Sidebar heading for `role`.
#[must_use]
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Administrator",
        Role::User => "User",
    }
}
