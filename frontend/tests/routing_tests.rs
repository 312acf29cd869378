use error_page::navigation::{resolve_route, NavigationError, HOME_PATH};
use error_page::pages::not_found::{ERROR_CODE, ERROR_MESSAGE, ERROR_TITLE, HOME_BUTTON_LABEL};
use error_page::Route;
use pretty_assertions::assert_eq;
use yew_router::Routable;

#[test]
fn test_return_home_target_is_a_real_route() {
    let route = resolve_route(HOME_PATH).expect("home path resolves");
    assert_eq!(route, Route::Home);
    assert_eq!(route.to_path(), HOME_PATH);
}

#[test]
fn test_unmatched_paths_are_reported() {
    let err = resolve_route("/does/not/exist").unwrap_err();
    assert_eq!(
        err,
        NavigationError::UnknownPath("/does/not/exist".to_string())
    );
}

#[test]
fn test_not_found_copy() {
    assert_eq!(ERROR_CODE, "404");
    assert_eq!(ERROR_TITLE, "Page Not Found");
    assert!(ERROR_MESSAGE.contains("doesn't exist"));
    assert_eq!(HOME_BUTTON_LABEL, "Go Back to Home");
}
