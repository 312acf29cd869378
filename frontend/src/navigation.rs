//! Navigation capability handed to pages through context.
//!
//! Pages never talk to the router directly. They emit a destination path into
//! [`NavigationContext::navigate`] and whoever provides the context decides
//! what that means. In the app that is [`NavigationProvider`], which maps the
//! path onto a [`Route`] and pushes it; in tests it is a recording callback.

use log::{debug, error, warn};
use thiserror::Error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route matches path '{0}'")]
    UnknownPath(String),
}

/// Maps a path onto a known route.
///
/// The router falls back to [`Route::NotFound`] for anything it can't match,
/// so that fallback is reported as an error unless the caller asked for the
/// not-found page explicitly.
pub fn resolve_route(path: &str) -> Result<Route, NavigationError> {
    match Route::recognize(path) {
        Some(Route::NotFound) if !is_not_found_path(path) => {
            Err(NavigationError::UnknownPath(path.to_string()))
        }
        Some(route) => Ok(route),
        None => Err(NavigationError::UnknownPath(path.to_string())),
    }
}

fn is_not_found_path(path: &str) -> bool {
    path.trim_end_matches('/') == Route::NotFound.to_path()
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationContext {
    pub navigate: Callback<String>,
}

impl NavigationContext {
    pub fn new(navigate: Callback<String>) -> Self {
        Self { navigate }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct NavigationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides [`NavigationContext`] backed by the surrounding router.
///
/// Must be mounted inside a `BrowserRouter`. Without one every request is
/// logged and dropped.
#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let navigator = use_navigator();

    let navigate = use_callback(navigator, |path: String, navigator| {
        let Some(navigator) = navigator else {
            error!("Navigation to '{}' requested outside of a router", path);
            return;
        };

        match resolve_route(&path) {
            Ok(route) => {
                debug!("Navigating to {:?}", route);
                navigator.push(&route);
            }
            Err(err) => {
                warn!("{}, showing not found page", err);
                navigator.push(&Route::NotFound);
            }
        }
    });

    let context = NavigationContext::new(navigate);

    html! {
        <ContextProvider<NavigationContext> context={context}>
            {props.children.clone()}
        </ContextProvider<NavigationContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("/", Route::Home ; "root")]
    #[test_case("/404", Route::NotFound ; "explicit not found")]
    #[test_case("/404/", Route::NotFound ; "not found with trailing slash")]
    fn test_resolve_known_paths(path: &str, expected: Route) {
        assert_eq!(resolve_route(path), Ok(expected));
    }

    #[test_case("/missing")]
    #[test_case("/games/42")]
    #[test_case("/4040")]
    fn test_resolve_unknown_paths(path: &str) {
        assert_eq!(
            resolve_route(path),
            Err(NavigationError::UnknownPath(path.to_string()))
        );
    }

    #[test]
    fn test_home_path_resolves_to_home() {
        assert_eq!(resolve_route(HOME_PATH), Ok(Route::Home));
    }

    #[test]
    fn test_unknown_path_error_message() {
        let err = NavigationError::UnknownPath("/nope".to_string());
        assert_eq!(err.to_string(), "no route matches path '/nope'");
    }
}
