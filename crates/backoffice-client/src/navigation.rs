use std::sync::Mutex;

use crate::routes::Route;

/// Location changes requested outside the route guard: logout and the
/// request wrapper's unauthorized redirect.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that records every location it was sent to.
#[derive(Debug)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: Mutex::new(vec![start]),
        }
    }

    pub fn current(&self) -> Route {
        self.history
            .lock()
            .ok()
            .and_then(|h| h.last().copied())
            .unwrap_or(Route::LANDING)
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(Route::LANDING)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(to = %route, "navigating");
        if let Ok(mut history) = self.history.lock() {
            history.push(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_locations() {
        let nav = HistoryNavigator::default();
        assert_eq!(nav.current(), Route::Dashboard);

        nav.navigate(Route::Employees);
        nav.navigate(Route::Login);
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(
            nav.history(),
            vec![Route::Dashboard, Route::Employees, Route::Login]
        );
    }
}
