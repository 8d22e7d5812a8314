//! Client-side routes.

use serde::{Deserialize, Serialize};

/// A page of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dashboard,
    Register,
    Products,
    Inventory,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Route; 4] = [
        Route::Dashboard,
        Route::Register,
        Route::Products,
        Route::Inventory,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Register => "/register",
            Route::Products => "/products",
            Route::Inventory => "/inventory",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Register => "Register product",
            Route::Products => "Products",
            Route::Inventory => "Inventory",
        }
    }

    /// Resolve a location path; query strings, fragments and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}
