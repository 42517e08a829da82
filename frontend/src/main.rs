use config::SiteConfig;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;

mod animations {
    pub mod ambient;
    pub mod carousel;
    pub mod reveal;
    pub mod scroll;
    pub mod typewriter;
}

mod utils {
    pub mod dom;
    pub mod frame_loop;
    pub mod listener;
}

mod components {
    pub mod animated_gradient;
    pub mod cards;
    pub mod fade_in;
    pub mod footer;
    pub mod navbar;
    pub mod pricing_cta;
    pub mod testimonial_carousel;
}

mod pages {
    pub mod about;
    pub mod docs;
    pub mod features;
    pub mod home;
    pub mod not_found;
    pub mod pricing;
}

use components::footer::Footer;
use components::navbar::Navbar;
use pages::{
    about::About, docs::Docs, features::Features, home::Home, not_found::NotFound,
    pricing::Pricing,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features")]
    Features,
    #[at("/pricing")]
    Pricing,
    #[at("/docs")]
    Docs,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Rendering route {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Features => html! { <Features /> },
        Route::Pricing => html! { <Pricing /> },
        Route::Docs => html! { <Docs /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Starts every page at the top, like a full page load would.
#[function_component(ScrollReset)]
fn scroll_reset() -> Html {
    let route = use_route::<Route>();
    use_effect_with_deps(
        |_| {
            utils::dom::scroll_to_top();
            || ()
        },
        route,
    );
    html! {}
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <BrowserRouter>
                <ScrollReset />
                <Navbar />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    let (config, problem) = config::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Some(e) = problem {
        log::warn!("Falling back to default site config: {}", e);
    }
    log::info!("Starting {} site", config.company_name);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
