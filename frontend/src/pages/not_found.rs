use crate::components::fade_in::FadeIn;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    if let Some(location) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
        log::warn!("No page at {}", location);
    }

    html! {
        <div class="not-found-page">
            <div class="container narrow">
                <FadeIn>
                    <h1>{"404"}</h1>
                    <p class="hero-subtitle">{"Oops! This page doesn't exist."}</p>
                    <Link<Route> to={Route::Home} classes="button primary">{"Return to Home"}</Link<Route>>
                </FadeIn>
            </div>
        </div>
    }
}
