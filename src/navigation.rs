use crate::models::Property;
use tracing::{debug, info};

/// Destinations of the navigation stack
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    /// Carries a snapshot of the listing that was opened
    PropertyDetail(Box<Property>),
    Favorites,
    Contact,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::PropertyDetail(_) => "PropertyDetail",
            Route::Favorites => "Favorites",
            Route::Contact => "Contact",
        }
    }
}

/// Stack navigator rooted at [`Route::Home`]
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> &Route {
        // the root is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open `route`. A screen of the same kind already on the stack is popped back
    /// to and takes the new parameters instead of stacking a duplicate.
    pub fn navigate(&mut self, route: Route) {
        info!("Navigating {} → {}", self.current().name(), route.name());
        match self.stack.iter().position(|r| r.name() == route.name()) {
            Some(pos) => {
                self.stack.truncate(pos);
                self.stack.push(route);
            }
            None => self.stack.push(route),
        }
        debug!("Navigation depth {}", self.depth());
    }

    pub fn contains(&self, route: &Route) -> bool {
        self.stack.iter().any(|r| r.name() == route.name())
    }

    pub fn pop_to_root(&mut self) {
        if self.stack.len() > 1 {
            info!("Returning to {}", Route::Home.name());
            self.stack.truncate(1);
        }
    }

    /// Pop one screen. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() == 1 {
            debug!("Back pressed on root screen");
            return false;
        }
        if let Some(left) = self.stack.pop() {
            info!("Back from {} to {}", left.name(), self.current().name());
        }
        true
    }
}
