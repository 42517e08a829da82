use crate::animations::scroll;
use crate::config::SiteConfig;
use crate::utils::dom;
use crate::utils::listener::WindowListener;
use crate::Route;
use std::cell::Cell;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_LINKS: [(&str, Route); 4] = [
    ("Features", Route::Features),
    ("Pricing", Route::Pricing),
    ("Documentation", Route::Docs),
    ("About", Route::About),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| scroll::is_scrolled(dom::scroll_y()));
    let route = use_route::<Route>();

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let last = Cell::new(*scrolled);
                let listener = WindowListener::new("scroll", move || {
                    let now = scroll::is_scrolled(dom::scroll_y());
                    if last.replace(now) != now {
                        scrolled.set(now);
                    }
                });
                if let Err(e) = &listener {
                    log::warn!("Navbar will not react to scrolling: {}", e);
                }
                move || drop(listener)
            },
            (),
        );
    }

    // Close the mobile menu on navigation.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = |mobile: bool| -> Html {
        NAV_LINKS
            .iter()
            .map(|(name, target)| {
                let active = route.as_ref() == Some(target);
                html! {
                    <Link<Route>
                        to={target.clone()}
                        classes={classes!(
                            if mobile { "mobile-nav-link" } else { "nav-link" },
                            active.then_some("active"),
                        )}
                    >
                        { *name }
                    </Link<Route>>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config.company_name.clone() }<span class="accent">{"."}</span>
                </Link<Route>>
                <nav class="nav-links">{ links(false) }</nav>
                <div class="nav-cta">
                    <Link<Route> to={Route::Pricing} classes="nav-get-started">{"Get Started"}</Link<Route>>
                </div>
                <button class="nav-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    <i class={classes!("fas", if *menu_open { "fa-xmark" } else { "fa-bars" })}></i>
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    <nav>{ links(true) }</nav>
                    <div class="mobile-cta">
                        <Link<Route> to={Route::Pricing} classes="nav-get-started">{"Get Started"}</Link<Route>>
                    </div>
                </div>
            }
        </header>
    }
}
