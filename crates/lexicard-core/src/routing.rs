//! Page routes and navigation history.
//!
//! The history only decides which way a page transition slides: revisiting
//! a page already on the stack unwinds to it and slides back, anything new
//! is pushed and slides forward.

use std::fmt;

use serde::Serialize;

use crate::error::NavigationError;

/// A registered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "main",
        title: "Главная",
    },
    Route {
        path: "/cards",
        name: "cards",
        title: "Карточки",
    },
    Route {
        path: "/memorization",
        name: "memorization",
        title: "Заучивание",
    },
    Route {
        path: "/spelling",
        name: "spelling",
        title: "Написание",
    },
    Route {
        path: "/selection",
        name: "selection",
        title: "Подбор",
    },
];

pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}

pub fn find_route_by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Direction of a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transition {
    #[serde(rename = "slide")]
    Slide,
    #[serde(rename = "slide-back")]
    SlideBack,
}

impl Transition {
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Slide => "slide",
            Transition::SlideBack => "slide-back",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visited paths, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NavHistory {
    entries: Vec<String>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit to `path` and pick the transition.
    pub fn navigate(&mut self, path: &str) -> Transition {
        match self.entries.iter().position(|p| p == path) {
            Some(index) => {
                self.entries.truncate(index + 1);
                Transition::SlideBack
            }
            None => {
                self.entries.push(path.to_string());
                Transition::Slide
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A completed navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub route: &'static Route,
    pub transition: Transition,
}

/// Route table plus history.
#[derive(Debug, Clone, Default)]
pub struct Router {
    history: NavHistory,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a registered path. Unknown paths leave the history
    /// untouched.
    pub fn navigate(&mut self, path: &str) -> Result<Navigation, NavigationError> {
        let route =
            find_route(path).ok_or_else(|| NavigationError::UnknownRoute(path.to_string()))?;
        let transition = self.history.navigate(route.path);
        tracing::debug!(path, %transition, "navigated");
        Ok(Navigation { route, transition })
    }

    pub fn history(&self) -> &NavHistory {
        &self.history
    }
}
