use crate::components::fade_in::FadeIn;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(PricingCta)]
pub fn pricing_cta() -> Html {
    let hovered = use_state(|| false);
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <section class="pricing-cta">
            <FadeIn>
                <div
                    class={classes!("pricing-cta-card", hovered.then_some("hovered"))}
                    onmouseenter={on_enter}
                    onmouseleave={on_leave}
                >
                    <div class="glow glow-top"></div>
                    <div class="glow glow-bottom"></div>
                    <div class="pricing-cta-body">
                        <span class="badge"><i class="fas fa-wand-magic-sparkles"></i>{" Get Started Today"}</span>
                        <h2>{"Ready to transform your development workflow?"}</h2>
                        <p>{"Choose from flexible plans that grow with your needs. Every plan includes core AI features, with advanced capabilities available in higher tiers."}</p>
                        <div class="cta-buttons">
                            <Link<Route> to={Route::Pricing} classes="button primary">{"View Pricing"}</Link<Route>>
                            <Link<Route> to={Route::Docs} classes="button outline">{"Read Documentation"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </FadeIn>
        </section>
    }
}
