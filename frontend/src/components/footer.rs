use crate::config::SiteConfig;
use crate::utils::dom;
use crate::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Whether a newsletter submission should be acknowledged.
pub fn accepts_signup(email: &str) -> bool {
    !email.trim().is_empty()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let email_ref = use_node_ref();
    let subscribed = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = email_ref.cast::<HtmlInputElement>() else {
                return;
            };
            if accepts_signup(&input.value()) {
                log::info!("Newsletter signup acknowledged");
                subscribed.set(true);
                if let Some(form) = input.form() {
                    form.reset();
                }
            }
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        { config.company_name.clone() }<span class="accent">{"."}</span>
                    </Link<Route>>
                    <p>{"The AI developer agent that writes, tests, and deploys for you, making software development faster and more efficient."}</p>
                    <div class="footer-social">
                        <a href="#" aria-label="GitHub"><i class="fab fa-github"></i></a>
                        <a href="#" aria-label="Twitter"><i class="fab fa-twitter"></i></a>
                        <a href="#" aria-label="LinkedIn"><i class="fab fa-linkedin"></i></a>
                        <a href={format!("mailto:{}", config.contact_email)} aria-label="Email"><i class="fas fa-envelope"></i></a>
                    </div>
                </div>
                <div>
                    <h4>{"Product"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Features}>{"Features"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Docs}>{"Documentation"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"About"}</Link<Route>></li>
                        <li><a href={format!("mailto:{}", config.contact_email)}>{"Contact"}</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Stay Updated"}</h4>
                    <p>{"Subscribe to our newsletter for updates, tips, and announcements."}</p>
                    <form class="newsletter-form" onsubmit={on_submit}>
                        <input ref={email_ref} type="email" name="email" placeholder="Enter your email" required=true />
                        <button type="submit">{"Subscribe"}</button>
                    </form>
                    if *subscribed {
                        <p class="form-notice">{"Thank you for subscribing to our newsletter!"}</p>
                    }
                </div>
            </div>
            <div class="footer-bottom">
                { format!("© {} {}. All rights reserved.", dom::current_year(), config.company_name) }
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::accepts_signup;

    #[test]
    fn blank_emails_are_ignored() {
        assert!(!accepts_signup(""));
        assert!(!accepts_signup("   "));
        assert!(accepts_signup("dev@example.com"));
    }
}
