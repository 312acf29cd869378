use log::{debug, warn};
use yew::prelude::*;

use crate::config::Config;
use crate::navigation::NavigationContext;

pub const ERROR_CODE: &str = "404";
pub const ERROR_TITLE: &str = "Page Not Found";
pub const ERROR_MESSAGE: &str = "Sorry, the page you're looking for doesn't exist.";
pub const HOME_BUTTON_LABEL: &str = "Go Back to Home";

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigation = use_context::<NavigationContext>();

    let on_return_home = Callback::from(move |_: MouseEvent| match &navigation {
        Some(navigation) => navigation.navigate.emit(Config::home_path().to_string()),
        None => warn!("No navigation context mounted, ignoring return home"),
    });

    debug!("Rendering not found page");

    html! {
        <div class="error-container">
            <div class="error-content">
                <h1 class="error-code">{ERROR_CODE}</h1>
                <h2 class="error-title">{ERROR_TITLE}</h2>
                <p class="error-message">{ERROR_MESSAGE}</p>
                <button type="button" class="error-button" onclick={on_return_home}>
                    {HOME_BUTTON_LABEL}
                </button>
            </div>
        </div>
    }
}
