use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <h1>{"Welcome"}</h1>
            <p>{"You're back on the home page."}</p>
        </div>
    }
}
